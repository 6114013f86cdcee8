//! gameshelf catalog server
//!
//! Serves read-only category and publisher listings from a SQLite database
//! populated by the catalog's administrative tooling.
//!
//! Usage:
//!   gameshelf-server --database gameshelf.db --port 5100

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gameshelf_server::{build_router, ServerConfig};
use gameshelf_storage::CatalogStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_level()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("gameshelf server starting...");
    let store = CatalogStore::open(&config.database).with_context(|| {
        format!("Failed to open catalog database {}", config.database.display())
    })?;
    info!("Catalog database: {}", config.database.display());

    let app = build_router(Arc::new(store));
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!("HTTP API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("gameshelf server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
