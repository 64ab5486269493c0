//! Service state and HTTP server lifecycle

use crate::config::SiteConfig;
use crate::routes;
use anyhow::{Context, Result};
use player_directory::PlayerDirectory;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::info;

/// Shared state for the running service
///
/// The player directory is loaded exactly once here and shared with
/// every request handler through an `Arc`; it is never mutated after
/// construction, so handlers read it concurrently without locking.
pub struct ServiceState {
    /// Service configuration
    pub config: SiteConfig,

    /// The read-only player directory
    pub directory: Arc<PlayerDirectory>,
}

impl ServiceState {
    /// Create service state, loading the player dataset
    pub async fn new(config: SiteConfig) -> Result<Self> {
        let directory = PlayerDirectory::load_from_file(&config.server.dataset_path)
            .await
            .with_context(|| {
                format!("Failed to load player dataset: {:?}", config.server.dataset_path)
            })?;

        Ok(Self { config, directory: Arc::new(directory) })
    }

    /// Start the HTTP server
    ///
    /// Returns the bound address, a sender that triggers graceful
    /// shutdown, and the server task handle.
    pub fn start_http_server(
        &self,
    ) -> Result<(SocketAddr, oneshot::Sender<()>, tokio::task::JoinHandle<()>)> {
        let routes = routes::create_routes(
            self.directory.clone(),
            self.config.server.site_url.clone(),
            self.config.server.featured_count,
        );

        let addr: SocketAddr =
            format!("{}:{}", self.config.server.bind_address, self.config.server.port)
                .parse()
                .with_context(|| {
                    format!(
                        "Invalid bind address: {}:{}",
                        self.config.server.bind_address, self.config.server.port
                    )
                })?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (bound_addr, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async move {
                let _ = shutdown_rx.await;
            })
            .with_context(|| format!("Failed to bind HTTP server to {addr}"))?;

        info!("HTTP server listening on http://{}", bound_addr);
        let handle = tokio::spawn(server);

        Ok((bound_addr, shutdown_tx, handle))
    }
}
