// src/config.rs
//
// Server configuration from command-line flags and environment variables

use clap::Parser;
use log::LevelFilter;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "filmhub", about = "In-memory film catalogue server", version)]
pub struct ServerConfig {
    #[arg(
        long,
        env = "FILMHUB_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080",
        help = "Address the HTTP server listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "FILMHUB_LOG_LEVEL",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level (off, error, warn, info, debug, trace); RUST_LOG overrides per module"
    )]
    pub log_level: LevelFilter,
}
