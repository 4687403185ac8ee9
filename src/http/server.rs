//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request IDs)
//! - Hold the shared upstream client and resolved configuration
//! - Serve with graceful shutdown

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::{frontend, proxy};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub client: Client<HttpConnector, Body>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from resolved configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        let state = AppState { config, client };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(state: AppState) -> Router {
        // The proxy route forwards zone payloads and exports of arbitrary
        // size, so the default request body cap is lifted there.
        let proxy_routes = get(proxy::proxy)
            .post(proxy::proxy)
            .put(proxy::proxy)
            .patch(proxy::proxy)
            .delete(proxy::proxy)
            .layer(DefaultBodyLimit::disable());

        Router::new()
            .route("/", get(frontend::index))
            .route("/api/config", get(frontend::api_config))
            .route("/api/pdns/{*suffix}", proxy_routes)
            .nest_service("/static", ServeDir::new(frontend::STATIC_DIR))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
