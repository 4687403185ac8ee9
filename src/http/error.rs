//! Gateway failure taxonomy.
//!
//! Only failures between this process and the PowerDNS API live here.
//! Upstream-reported errors (4xx/5xx responses with a body) are not
//! gateway errors; they pass through response normalization untouched so
//! the browser sees exactly what PowerDNS said.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the proxy handler. Each one terminates the request
/// with a `{"detail": ...}` body, the error shape the frontend expects.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// TCP connect to the upstream failed.
    #[error("Cannot connect to PowerDNS API at {url}: {detail}")]
    Unreachable { url: String, detail: String },

    /// The upstream did not answer within the configured timeout.
    #[error("PowerDNS API request timed out")]
    Timeout,

    /// Anything else: a target URL that does not parse, a request that
    /// cannot be built, a response stream that dies mid-read.
    #[error("{0}")]
    Unexpected(String),
}

impl ProxyError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Unreachable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            ProxyError::Unreachable { url, .. } => {
                tracing::warn!(upstream = %url, "PowerDNS API unreachable");
            }
            ProxyError::Timeout => {
                tracing::warn!("PowerDNS API request timed out");
            }
            ProxyError::Unexpected(detail) => {
                tracing::error!(detail = %detail, "Unexpected proxy failure");
            }
        }
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
