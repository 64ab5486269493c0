//! Logging and tracing setup

use crate::config::LoggingConfig;
use anyhow::Result;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt, EnvFilter,
};

/// Initialize logging and tracing from the service configuration
///
/// `RUST_LOG` takes precedence over the configured level so operators
/// can raise verbosity without touching the config file.
pub fn initialize_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let fmt_layer = match config.format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        _ => fmt::layer()
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true)
            .boxed(),
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();

    Ok(())
}
