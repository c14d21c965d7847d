//! Session snapshot configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session snapshot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key holding the last-known user
    #[serde(default = "default_snapshot_key")]
    pub snapshot_key: String,
    /// Fall back to the snapshot when the live session fetch fails
    #[serde(default = "default_true")]
    pub enable_fallback: bool,
    /// Maximum snapshot age in seconds; 0 disables expiry
    #[serde(default = "default_snapshot_max_age")]
    pub snapshot_max_age: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            snapshot_key: default_snapshot_key(),
            enable_fallback: true,
            snapshot_max_age: default_snapshot_max_age(),
        }
    }
}

impl SessionConfig {
    /// Maximum snapshot age, `None` when snapshots never expire
    pub fn max_age(&self) -> Option<Duration> {
        (self.snapshot_max_age > 0).then(|| Duration::from_secs(self.snapshot_max_age))
    }

    /// Merge session configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.snapshot_key != default_snapshot_key() {
            self.snapshot_key = other.snapshot_key;
        }
        if !other.enable_fallback {
            self.enable_fallback = other.enable_fallback;
        }
        if other.snapshot_max_age != default_snapshot_max_age() {
            self.snapshot_max_age = other.snapshot_max_age;
        }
        self
    }
}
