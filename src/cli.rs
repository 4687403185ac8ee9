//! Command-line interface.
//!
//! The container image drives everything through the environment; the
//! flags here exist for ad-hoc runs where rebinding should not require
//! editing `.env`. Flags win over environment values.

use clap::Parser;

use crate::config::ListenConfig;

#[derive(Debug, Parser)]
#[command(name = "pdns-webui")]
#[command(version)]
#[command(about = "Web UI and API gateway for the PowerDNS HTTP API", long_about = None)]
pub struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Fold flag overrides into an environment-resolved listener config.
    pub fn apply(&self, mut listen: ListenConfig) -> ListenConfig {
        if let Some(host) = &self.host {
            listen.host = host.clone();
        }
        if let Some(port) = self.port {
            listen.port = port.to_string();
        }
        listen
    }
}
