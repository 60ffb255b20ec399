//! HTTP server for the trivia API.
//!
//! # Responsibility
//! - Expose `trivia_core` use-cases as a JSON API.
//! - Bootstrap configuration, logging and storage for the binary.

pub mod api;
pub mod config;

pub use api::{router, AppState};
pub use config::{ConfigError, ServerConfig};

use log::info;
use tokio::net::TcpListener;

/// Serves the API on `config.bind_addr` until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_start module=server status=ok addr={} version={}",
        listener.local_addr()?,
        trivia_core::core_version()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=shutdown_signal module=server status=error error={err}");
    }
}
