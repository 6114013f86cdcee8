//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "gameshelf-server")]
#[command(about = "Read-only catalog API for game categories and publishers")]
pub struct ServerConfig {
    /// Path to the SQLite database file
    #[arg(short, long, env = "GAMESHELF_DATABASE", default_value = "gameshelf.db")]
    pub database: PathBuf,

    /// Address to bind the HTTP listener to
    #[arg(long, env = "GAMESHELF_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// HTTP port
    #[arg(short, long, env = "GAMESHELF_PORT", default_value = "5100")]
    pub port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Default log directive when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
