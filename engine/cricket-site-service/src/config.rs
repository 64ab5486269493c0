//! Service configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// HTTP server settings
    pub server: ServerSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind the HTTP server to
    pub bind_address: String,

    /// Port to bind the HTTP server to
    pub port: u16,

    /// Public base URL used for canonical links and Open Graph tags
    pub site_url: String,

    /// Path to the player dataset JSON file
    pub dataset_path: PathBuf,

    /// Number of players featured on the home page
    pub featured_count: usize,

    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            site_url: "http://localhost:3000".to_string(),
            dataset_path: PathBuf::from("./data/players.json"),
            featured_count: 6,
            shutdown_timeout_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

/// Load configuration from an optional TOML file and environment variables
///
/// Precedence: defaults, then the config file (path from `CRICKET_CONFIG`
/// if set), then `CRICKET_*` environment variables.
pub fn load_config() -> Result<SiteConfig> {
    let mut config = match std::env::var("CRICKET_CONFIG") {
        Ok(path) => load_from_file(std::path::Path::new(&path))?,
        Err(_) => SiteConfig::default(),
    };

    load_from_env(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file
fn load_from_file(path: &std::path::Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {path:?}"))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config file: {path:?}"))
}

/// Apply environment variable overrides
fn load_from_env(config: &mut SiteConfig) {
    if let Ok(address) = std::env::var("CRICKET_BIND_ADDRESS") {
        config.server.bind_address = address;
    }

    if let Ok(port) = std::env::var("CRICKET_PORT") {
        if let Ok(port) = port.parse() {
            config.server.port = port;
        }
    }

    if let Ok(site_url) = std::env::var("CRICKET_SITE_URL") {
        config.server.site_url = site_url;
    }

    if let Ok(dataset) = std::env::var("CRICKET_DATASET") {
        config.server.dataset_path = PathBuf::from(dataset);
    }

    if let Ok(count) = std::env::var("CRICKET_FEATURED_COUNT") {
        if let Ok(count) = count.parse() {
            config.server.featured_count = count;
        }
    }

    if let Ok(level) = std::env::var("CRICKET_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("CRICKET_LOG_FORMAT") {
        config.logging.format = format;
    }
}

/// Validate configuration
fn validate_config(config: &SiteConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(anyhow::anyhow!("Invalid server port: {}", config.server.port));
    }

    if !config.server.dataset_path.exists() {
        return Err(anyhow::anyhow!(
            "Dataset file does not exist: {:?}",
            config.server.dataset_path
        ));
    }

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow::anyhow!("Invalid log level: {}", config.logging.level)),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" => {}
        _ => return Err(anyhow::anyhow!("Invalid log format: {}", config.logging.format)),
    }

    // Trailing slash would double up in canonical URLs
    if config.server.site_url.ends_with('/') {
        return Err(anyhow::anyhow!(
            "site_url must not end with a slash: {}",
            config.server.site_url
        ));
    }

    Ok(())
}
