//! PowerDNS proxy handler.
//!
//! # Responsibilities
//! - Rewrite `/api/pdns/{suffix}` to `{base}/api/v1/{suffix}`
//! - Inject the API key; inbound headers are never forwarded
//! - Forward method, query string, and body byte-for-byte
//! - Normalize the upstream response into JSON the browser can consume
//!
//! # Design Decisions
//! - The suffix is taken from the raw request URI rather than a path
//!   extractor, so percent-encoded zone names reach PowerDNS unchanged
//! - A body that claims `application/json` but fails to parse is wrapped
//!   as text instead of failing the request; some PowerDNS endpoints
//!   mislabel plain-text payloads
//! - One upstream attempt per request; every failure is terminal

use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use hyper::body::Incoming;

use crate::http::error::ProxyError;
use crate::http::server::AppState;

/// Inbound prefix that triggers forwarding.
pub const PROXY_PREFIX: &str = "/api/pdns/";

/// Version prefix of the upstream PowerDNS HTTP API.
const UPSTREAM_PREFIX: &str = "/api/v1";

/// Header carrying the shared secret to the upstream.
const API_KEY_HEADER: &str = "x-api-key";

/// Forward one request to the PowerDNS API and normalize the reply.
pub async fn proxy(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let suffix = uri.path().strip_prefix(PROXY_PREFIX).unwrap_or_default();
    if suffix.is_empty() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }
    let target = target_url(&state.config.pdns.url, suffix, uri.query());

    let response = forward(&state, method, &target, body).await?;
    normalize(response).await
}

/// Build the upstream URL: base + `/api/v1/` + suffix, with the inbound
/// query string appended verbatim.
fn target_url(base: &str, suffix: &str, query: Option<&str>) -> String {
    let mut target = format!("{base}{UPSTREAM_PREFIX}/{suffix}");
    if let Some(query) = query {
        target.push('?');
        target.push_str(query);
    }
    target
}

/// Send one request upstream, bounded by the configured timeout.
async fn forward(
    state: &AppState,
    method: Method,
    target: &str,
    body: Bytes,
) -> Result<hyper::Response<Incoming>, ProxyError> {
    let uri: Uri = target
        .parse()
        .map_err(|e| ProxyError::Unexpected(format!("Invalid upstream URL {target}: {e}")))?;

    tracing::info!(method = %method, target = %target, "Proxying request to PowerDNS");

    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(API_KEY_HEADER, state.config.pdns.key.as_str())
        .header(header::ACCEPT, "application/json");
    if !body.is_empty() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(Body::from(body))
        .map_err(|e| ProxyError::Unexpected(format!("Failed to build upstream request: {e}")))?;

    let timeout = Duration::from_secs(state.config.timeouts.upstream_secs);
    match tokio::time::timeout(timeout, state.client.request(request)).await {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(e)) if e.is_connect() => Err(ProxyError::Unreachable {
            url: state.config.pdns.url.clone(),
            detail: e.to_string(),
        }),
        Ok(Err(e)) => Err(ProxyError::Unexpected(e.to_string())),
        Err(_) => Err(ProxyError::Timeout),
    }
}

/// Translate the upstream response into what the browser receives.
async fn normalize(response: hyper::Response<Incoming>) -> Result<Response, ProxyError> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    let body = axum::body::to_bytes(Body::new(response.into_body()), usize::MAX)
        .await
        .map_err(|e| ProxyError::Unexpected(format!("Failed to read upstream body: {e}")))?;

    Ok(render(status, &content_type, &body))
}

/// Pure half of normalization: status is preserved, JSON bodies pass
/// through, everything else is wrapped as `{"result": <text>}`.
fn render(status: StatusCode, content_type: &str, body: &[u8]) -> Response {
    if content_type.contains("application/json") {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
            return (status, Json(value)).into_response();
        }
        // Claimed JSON but did not parse; fall through to the text wrap.
    }
    let text = String::from_utf8_lossy(body).into_owned();
    (status, Json(serde_json::json!({ "result": text }))).into_response()
}
