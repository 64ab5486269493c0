//! Signal handling for graceful shutdown

use anyhow::Result;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// Setup signal handlers for graceful shutdown
///
/// Returns a receiver that resolves when SIGINT (Ctrl+C) or SIGTERM is
/// received.
pub fn setup_signal_handlers() -> Result<oneshot::Receiver<()>> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let (signal_tx, mut signal_rx) = tokio::sync::mpsc::channel::<&'static str>(2);

    // Handle Ctrl+C (SIGINT)
    {
        let signal_tx = signal_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C signal: {}", e);
                return;
            }
            let _ = signal_tx.send("SIGINT").await;
        });
    }

    // Handle SIGTERM (Unix only)
    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use signal_hook::consts::SIGTERM;
            use std::sync::atomic::{AtomicBool, Ordering};
            use std::sync::Arc;

            let shutdown_flag = Arc::new(AtomicBool::new(false));
            if let Err(e) = signal_hook::flag::register(SIGTERM, shutdown_flag.clone()) {
                error!("Failed to register SIGTERM handler: {}", e);
                return;
            }

            loop {
                if shutdown_flag.load(Ordering::Relaxed) {
                    let _ = signal_tx.send("SIGTERM").await;
                    break;
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        });
    }

    tokio::spawn(async move {
        if let Some(signal) = signal_rx.recv().await {
            info!("{} signal received", signal);
            let _ = shutdown_tx.send(());
        }
    });

    Ok(shutdown_rx)
}

/// Graceful shutdown handler
///
/// Signals the server task to stop and waits for it, bounded by the
/// configured shutdown timeout.
pub async fn graceful_shutdown(
    server_shutdown: oneshot::Sender<()>,
    server_handle: tokio::task::JoinHandle<()>,
    shutdown_timeout_secs: u64,
) -> Result<()> {
    info!("Starting graceful shutdown...");

    let _ = server_shutdown.send(());

    match timeout(Duration::from_secs(shutdown_timeout_secs), server_handle).await {
        Ok(Ok(())) => {
            info!("HTTP server stopped gracefully");
        }
        Ok(Err(e)) => {
            error!("HTTP server task failed: {}", e);
        }
        Err(_) => {
            warn!("HTTP server did not stop within timeout, forcing shutdown");
        }
    }

    info!("Graceful shutdown complete");
    Ok(())
}
