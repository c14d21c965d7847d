//! Permission table and numeric permission level

use super::helpers::{LEVEL_ADMIN_TOKENS, LEVEL_MODERATOR_TOKENS, normalize_role};
use super::types::{PermissionLevel, PermissionRecord, RoleClass};

/// Role assumed by the permission table when none is given
pub const DEFAULT_PERMISSION_ROLE: &str = "viewer";

/// Class chosen by the permission table for a raw role
///
/// Admin matches by substring, editor only by exact equality; everything else,
/// including `"editor-in-training"`, falls through to viewer.
pub fn permission_class(role: Option<&str>) -> RoleClass {
    let normalized = normalize_role(Some(role.unwrap_or(DEFAULT_PERMISSION_ROLE)));

    if normalized.contains("admin") {
        RoleClass::Admin
    } else if normalized == "editor" {
        RoleClass::Editor
    } else {
        RoleClass::Viewer
    }
}

/// Capability record for a raw role; total, unknown roles get the viewer record
pub fn get_permissions(role: Option<&str>) -> PermissionRecord {
    PermissionRecord::for_class(permission_class(role))
}

/// Numeric permission level for a raw role
///
/// A missing or empty role scores [`PermissionLevel::None`]. Admin is matched on
/// exact tokens only; moderator on exact tokens or any role containing `"mod"`.
pub fn get_user_permission_level(role: Option<&str>) -> PermissionLevel {
    let Some(raw) = role.filter(|r| !r.is_empty()) else {
        return PermissionLevel::None;
    };

    let normalized = normalize_role(Some(raw));

    if LEVEL_ADMIN_TOKENS.contains(&normalized.as_str()) {
        PermissionLevel::Admin
    } else if LEVEL_MODERATOR_TOKENS.contains(&normalized.as_str()) || normalized.contains("mod")
    {
        PermissionLevel::Moderator
    } else {
        PermissionLevel::Basic
    }
}
