//! Integration tests for dashboard-rbac

pub mod config_tests;
pub mod role_resolution_tests;
pub mod session_guard_tests;
