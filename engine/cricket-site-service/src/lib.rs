//! Cricket Profiles Service Library
//!
//! Server-rendered cricket player profile site: configuration, logging,
//! the warp HTTP server, and the HTML/SEO rendering over the
//! `player-directory` query layer.

use anyhow::{Context, Result};

pub mod config;
pub mod logging;
pub mod render;
pub mod routes;
pub mod seo;
pub mod service;
pub mod signals;

pub use config::SiteConfig;
pub use logging::initialize_logging;
pub use service::ServiceState;
pub use signals::{graceful_shutdown, setup_signal_handlers};

/// Load configuration from files and environment variables
pub fn load_configuration() -> Result<SiteConfig> {
    config::load_config().context("Failed to load service configuration")
}
