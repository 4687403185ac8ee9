//! Configuration schema definitions.
//!
//! Every setting has a usable default, so a bare `pdns-webui` with no
//! environment at all starts against a local PowerDNS in its stock
//! configuration. Nothing here is read again after startup; handlers get
//! an already-resolved [`GatewayConfig`] through application state.

use crate::config::env::{env_flag, env_or};

const DEFAULT_API_URL: &str = "http://localhost:8081";
const DEFAULT_API_KEY: &str = "changeme";
const DEFAULT_SERVER_ID: &str = "localhost";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Listener settings (bind address, debug logging).
    pub listener: ListenConfig,

    /// Upstream PowerDNS API settings.
    pub pdns: PdnsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

impl GatewayConfig {
    /// Resolve the full configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            listener: ListenConfig::from_env(),
            pdns: PdnsConfig::from_env(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenConfig {
    /// Address to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port to listen on. Kept as a string so a bad value fails at bind
    /// time with the address in the error.
    pub port: String,

    /// Raise the default log level to debug.
    pub debug: bool,
}

impl ListenConfig {
    /// Resolve from `HOST`, `PORT`, and `DEBUG`.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", DEFAULT_HOST),
            port: env_or("PORT", DEFAULT_PORT),
            debug: env_flag("DEBUG"),
        }
    }

    /// Bind address in "host:port" form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            debug: false,
        }
    }
}

/// Upstream PowerDNS API configuration.
#[derive(Debug, Clone)]
pub struct PdnsConfig {
    /// Base URL of the PowerDNS HTTP API, never with a trailing slash.
    pub url: String,

    /// Shared secret sent as `X-API-Key` on every upstream request.
    pub key: String,

    /// Server instance name the frontend should address (PowerDNS calls
    /// its default instance "localhost").
    pub server_id: String,
}

impl PdnsConfig {
    /// Resolve from `PDNS_API_URL`, `PDNS_API_KEY`, and `PDNS_SERVER_ID`.
    pub fn from_env() -> Self {
        Self {
            url: env_or("PDNS_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            key: env_or("PDNS_API_KEY", DEFAULT_API_KEY),
            server_id: env_or("PDNS_SERVER_ID", DEFAULT_SERVER_ID),
        }
    }
}

impl Default for PdnsConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            key: DEFAULT_API_KEY.to_string(),
            server_id: DEFAULT_SERVER_ID.to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Total time allowed for one upstream request/response exchange,
    /// in seconds. Zone exports of large zones can take a while.
    pub upstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            upstream_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}
