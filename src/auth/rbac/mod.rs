//! Role-Based Access Control (RBAC) for the dashboard
//!
//! Role classifiers, the numeric permission level and the static permission
//! table. Each matcher keeps its own token table; they are not unified.

mod helpers;
mod permissions;
mod roles;
mod types;

pub use permissions::{
    DEFAULT_PERMISSION_ROLE, get_permissions, get_user_permission_level, permission_class,
};
pub use roles::{has_required_role, has_valid_role, is_admin_role, is_editor_role, is_viewer_role};
pub use types::{AccessRequirement, Menu, PermissionLevel, PermissionRecord, RoleClass};
