//! Configuration loading from environment variables

use super::models::*;
use crate::utils::error::{DashboardError, Result};
use std::str::FromStr;
use tracing::debug;

/// Environment variable overriding the snapshot key
pub const ENV_SNAPSHOT_KEY: &str = "DASHBOARD_SNAPSHOT_KEY";
/// Environment variable toggling the snapshot fallback
pub const ENV_SESSION_FALLBACK: &str = "DASHBOARD_SESSION_FALLBACK";
/// Environment variable setting the snapshot max age in seconds
pub const ENV_SNAPSHOT_MAX_AGE: &str = "DASHBOARD_SNAPSHOT_MAX_AGE";
/// Environment variable setting the log level
pub const ENV_LOG_LEVEL: &str = "DASHBOARD_LOG_LEVEL";
/// Environment variable toggling JSON logs
pub const ENV_LOG_JSON: &str = "DASHBOARD_LOG_JSON";

impl DashboardConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup, defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Some(key) = lookup(ENV_SNAPSHOT_KEY) {
            config.session.snapshot_key = key;
        }
        if let Some(fallback) = lookup(ENV_SESSION_FALLBACK) {
            config.session.enable_fallback = parse_var(ENV_SESSION_FALLBACK, &fallback)?;
        }
        if let Some(max_age) = lookup(ENV_SNAPSHOT_MAX_AGE) {
            config.session.snapshot_max_age = parse_var(ENV_SNAPSHOT_MAX_AGE, &max_age)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            config.logging.json = parse_var(ENV_LOG_JSON, &json)?;
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| DashboardError::Config(format!("Invalid {}: {}", name, e)))
}
