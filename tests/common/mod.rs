//! Shared utilities for integration testing.
//!
//! Every test gets its own mock PowerDNS API and its own gateway, both on
//! ephemeral ports, so the test binaries can run fully in parallel.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::Response,
    Router,
};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

use pdns_webui::config::GatewayConfig;
use pdns_webui::http::HttpServer;

/// One request as observed by the mock upstream.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Canned reply the mock upstream sends back.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
}

impl MockReply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            content_type: Some("application/json"),
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn text(status: u16, content_type: &'static str, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            content_type: Some(content_type),
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            content_type: None,
            body: Vec::new(),
        }
    }
}

type Responder = dyn Fn(&ReceivedRequest) -> MockReply + Send + Sync;

#[derive(Clone)]
struct UpstreamState {
    responder: Arc<Responder>,
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Start a programmable mock PowerDNS API on an ephemeral port. Returns
/// its base URL and a log of every request it received.
pub async fn start_upstream<F>(respond: F) -> (String, Arc<Mutex<Vec<ReceivedRequest>>>)
where
    F: Fn(&ReceivedRequest) -> MockReply + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = UpstreamState {
        responder: Arc::new(respond),
        requests: requests.clone(),
    };

    let app = Router::new().fallback(record).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}"), requests)
}

async fn record(
    State(state): State<UpstreamState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let received = ReceivedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: body.to_vec(),
    };

    let reply = (state.responder)(&received);
    state.requests.lock().unwrap().push(received);

    let mut builder = Response::builder().status(reply.status);
    if let Some(content_type) = reply.content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(reply.body)).unwrap()
}

/// Start an upstream that accepts connections and never answers. Used to
/// drive the gateway into its timeout path.
pub async fn start_hanging_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        while let Ok(n) = socket.read(&mut buf).await {
                            if n == 0 {
                                break;
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    format!("http://{addr}")
}

/// Gateway config pointing at the given upstream, with a timeout short
/// enough for tests.
pub fn test_config(upstream_url: &str) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.pdns.url = upstream_url.trim_end_matches('/').to_string();
    config.pdns.key = "test-secret".to_string();
    config.timeouts.upstream_secs = 5;
    config
}

/// Start the gateway itself on an ephemeral port. Returns its base URL.
pub async fn spawn_gateway(config: GatewayConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{addr}")
}

/// HTTP client for talking to the gateway under test.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
