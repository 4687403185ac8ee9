//! Frontend surface: SPA entry point and browser bootstrap config.
//!
//! The single-page app is plain HTML/JS served from disk. It learns which
//! PowerDNS server instance to talk to from `/api/config` before issuing
//! its first `/api/pdns/` call; the API key never appears here.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::http::server::AppState;

/// On-disk location of the SPA entry point.
pub const INDEX_FILE: &str = "templates/index.html";

/// On-disk directory served under `/static`.
pub const STATIC_DIR: &str = "static";

/// Payload for `GET /api/config`.
#[derive(Debug, Serialize)]
pub struct FrontendConfig {
    pub server_id: String,
}

/// `GET /` serves the SPA entry point.
pub async fn index() -> Result<Html<String>, (StatusCode, Json<serde_json::Value>)> {
    match tokio::fs::read_to_string(INDEX_FILE).await {
        Ok(page) => Ok(Html(page)),
        Err(e) => {
            tracing::error!(file = INDEX_FILE, error = %e, "Failed to read SPA entry point");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "template render error" })),
            ))
        }
    }
}

/// `GET /api/config` tells the browser which server instance to address.
pub async fn api_config(State(state): State<AppState>) -> Json<FrontendConfig> {
    Json(FrontendConfig {
        server_id: state.config.pdns.server_id.clone(),
    })
}
