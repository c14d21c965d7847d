//! Error handling for the dashboard access layer
//!
//! Role classification itself never fails; these types cover the fallible edges
//! (configuration, snapshot storage and the session collaborator).

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{DashboardError, Result};
