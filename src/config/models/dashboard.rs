//! Top-level dashboard configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Dashboard access configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// Session snapshot configuration
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.session = self.session.merge(other.session);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
