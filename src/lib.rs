//! PowerDNS Web UI gateway library.
//!
//! Serves a browser SPA and forwards its `/api/pdns/` calls to the
//! PowerDNS HTTP API, injecting the API key server-side so the secret
//! never reaches the browser.

pub mod cli;
pub mod config;
pub mod http;

pub use config::GatewayConfig;
pub use http::HttpServer;
