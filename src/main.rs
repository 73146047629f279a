// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::info;

use filmhub::application::{router, AppState};
use filmhub::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION
    let config = ServerConfig::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    // 2. STATE (repositories + services)
    let state = AppState::in_memory();

    // 3. HTTP SERVER
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("filmhub listening on {}", config.bind);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("filmhub stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
    }
}
