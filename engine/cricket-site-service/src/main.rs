//! Cricket Profiles Service
//!
//! Entry point for the server-rendered cricket player profile site. It
//! loads the static player dataset once, starts the HTTP server, and
//! handles graceful shutdown.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use cricket_site_service::{
    graceful_shutdown, initialize_logging, load_configuration, setup_signal_handlers,
    ServiceState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so logging can follow it
    let config = load_configuration().context("Failed to load configuration")?;
    initialize_logging(&config.logging)?;

    info!("Starting Cricket Profiles Service v{}", env!("CARGO_PKG_VERSION"));

    // Create service state; this loads the player dataset exactly once
    let service_state = Arc::new(ServiceState::new(config).await?);
    info!("Service state initialized");

    // Setup signal handlers for graceful shutdown
    let shutdown_signal = setup_signal_handlers()?;
    info!("Signal handlers configured");

    // Start the HTTP server
    let (_addr, server_shutdown, server_handle) = service_state.start_http_server()?;

    // Wait for shutdown signal
    info!("Cricket Profiles Service is running. Press Ctrl+C to shutdown gracefully.");
    let _ = shutdown_signal.await;

    info!("Shutdown signal received. Initiating graceful shutdown...");
    graceful_shutdown(
        server_shutdown,
        server_handle,
        service_state.config.server.shutdown_timeout_secs,
    )
    .await?;

    info!("Cricket Profiles Service shutdown complete");
    Ok(())
}
