//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHUTDOWN_GRACE_SECONDS` - How long in-flight requests may run after a
//!   shutdown signal (default: 10, range: 1-300)
//!
//! A `.env` file in the working directory is honoured (see `main.rs`).

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Advisory drain window after SIGINT/SIGTERM, in seconds.
    pub shutdown_grace_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            shutdown_grace_seconds: 10,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let shutdown_grace_seconds = env::var("SHUTDOWN_GRACE_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.shutdown_grace_seconds);

        Self {
            listen_addr,
            log_level,
            log_format,
            shutdown_grace_seconds,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `shutdown_grace_seconds` is outside 1-300
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.shutdown_grace_seconds == 0 || self.shutdown_grace_seconds > 300 {
            anyhow::bail!(
                "SHUTDOWN_GRACE_SECONDS must be between 1 and 300, got {}",
                self.shutdown_grace_seconds
            );
        }

        Ok(())
    }

    /// Drain window as a [`Duration`].
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Shutdown grace: {}s", self.shutdown_grace_seconds);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
