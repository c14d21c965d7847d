//! # dashboard-rbac
//!
//! Access control for the social platform admin dashboard.
//!
//! ## Features
//!
//! - **Role classification**: free-form, possibly Arabic, role strings resolved
//!   into admin / editor / viewer
//! - **Permission table**: capability flags and menu visibility per role class
//! - **Permission level**: coarse 0 / 10 / 50 / 100 privilege score
//! - **Page guards**: requirement checks and page allow-lists
//! - **Session guard**: live session check with a cached snapshot fallback
//!
//! ## Quick Start
//!
//! ```rust
//! use dashboard_rbac::{AccessRequirement, Menu, get_permissions, has_required_role, is_admin_role};
//!
//! assert!(is_admin_role(Some("  Super Admin ")));
//! assert!(has_required_role(Some("editor"), AccessRequirement::Editor));
//! assert!(!get_permissions(Some("editor")).allows_menu(Menu::Logs));
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::*;
pub use config::Config;
pub use utils::error::{DashboardError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
