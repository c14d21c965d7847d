//! Logging setup
//!
//! Installs a global `tracing` subscriber driven by [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::utils::error::{DashboardError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for the configured level
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.trim().to_lowercase()))
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| DashboardError::internal(format!("Failed to initialize logging: {}", e)))
}
