//! Configuration data models
//!
//! This module defines all configuration structures used by the dashboard access layer.

#![allow(missing_docs)]

pub mod dashboard;
pub mod logging;
pub mod session;

// Re-export all configuration types
pub use dashboard::*;
pub use logging::*;
pub use session::*;

/// Default storage key of the cached session snapshot
pub fn default_snapshot_key() -> String {
    "dashboard.currentUser".to_string()
}

/// Default maximum snapshot age in seconds (0 = never expires)
pub fn default_snapshot_max_age() -> u64 {
    0
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
