//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `dashboard_validators`: validators for the session and logging sections
//! - `tests`: Test suite for all validators

mod dashboard_validators;
mod trait_def;

pub use trait_def::Validate;
