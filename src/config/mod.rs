//! Configuration management for the dashboard access layer
//!
//! This module handles loading, validation, and merging of configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{DashboardError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Dashboard configuration
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DashboardError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let dashboard: DashboardConfig = serde_yaml::from_str(content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { dashboard };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            dashboard: DashboardConfig::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Get session configuration
    pub fn session(&self) -> &SessionConfig {
        &self.dashboard.session
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.dashboard.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(&self.dashboard).map_err(DashboardError::Config)
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.dashboard = self.dashboard.merge(other.dashboard);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.dashboard).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize config to JSON: {}", e))
        })
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.dashboard).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
