//! Dashboard configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating dashboard configuration");

        self.session.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.snapshot_key.is_empty() {
            return Err("Session snapshot key cannot be empty".to_string());
        }

        if self.snapshot_key.chars().any(char::is_whitespace) {
            return Err(format!(
                "Session snapshot key must not contain whitespace: {:?}",
                self.snapshot_key
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Invalid log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
