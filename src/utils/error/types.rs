//! Error types for the dashboard access layer

use thiserror::Error;

/// Result type alias for the dashboard access layer
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for the dashboard access layer
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session errors (live session fetch or logout)
    #[error("Session error: {0}")]
    Session(String),

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
