use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::logging::LogFormat;

/// Runtime settings. Flags win over environment variables, which `main`
/// may have loaded from a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version)]
#[command(about = "In-memory todo HTTP service")]
pub struct Config {
    /// Address to bind the HTTP listener on
    #[arg(long, env = "SERVER_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind the HTTP listener on
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
