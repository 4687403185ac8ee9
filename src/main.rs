//! PowerDNS Web UI gateway.
//!
//! A small HTTP frontend for PowerDNS: serves the management SPA and
//! proxies its API calls to the PowerDNS HTTP API.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 PDNS-WEBUI                   │
//!                    │                                              │
//!   Browser          │  ┌────────┐   ┌───────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│  http  │──▶│   proxy   │──▶│  hyper   │──┼──▶ PowerDNS
//!   / /static /api   │  │ server │   │ rewrite + │   │  client  │  │    HTTP API
//!                    │  └────────┘   │ key inject│   └──────────┘  │    (/api/v1)
//!                    │       │       └───────────┘                 │
//!                    │       ▼                                     │
//!                    │  ┌────────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌─────────┐ ┌───────────┐  │ │
//!                    │  │  │ config │ │ tracing │ │ request   │  │ │
//!                    │  │  │ (env)  │ │         │ │ IDs       │  │ │
//!                    │  │  └────────┘ └─────────┘ └───────────┘  │ │
//!                    │  └────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Startup order: load `.env`, parse flags, resolve configuration from
//! the environment, initialize tracing, bind, serve.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdns_webui::cli::Cli;
use pdns_webui::config::GatewayConfig;
use pdns_webui::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Values already present in the real environment win over the file.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GatewayConfig::from_env();
    config.listener = cli.apply(config.listener);

    init_tracing(config.listener.debug);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "PowerDNS Web UI starting"
    );

    tracing::info!(
        upstream = %config.pdns.url,
        server_id = %config.pdns.server_id,
        bind_address = %config.listener.bind_address(),
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber. `RUST_LOG` wins when set; otherwise
/// `DEBUG=1` raises the default level from info to debug.
fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "pdns_webui=debug,tower_http=debug"
    } else {
        "pdns_webui=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
