//! Role classification over free-form role strings
//!
//! Role strings come straight from the user record and may be localized,
//! mixed-case or padded. Matching is by exact token or by substring, so compound
//! labels such as "Super Admin" or "Senior Editor" classify without enumeration.

use super::helpers::{
    ADMIN_ROLE_TOKENS, EDITOR_ROLE_TOKENS, VIEWER_ROLE_TOKENS, matches_tokens, normalize_role,
};
use super::types::{AccessRequirement, RoleClass};

/// Whether the role is admin-equivalent
///
/// Any normalized role containing `"admin"` qualifies, including labels like
/// `"non-admin-trainee"`.
pub fn is_admin_role(role: Option<&str>) -> bool {
    matches_tokens(&normalize_role(role), ADMIN_ROLE_TOKENS, "admin")
}

/// Whether the role is editor-equivalent
pub fn is_editor_role(role: Option<&str>) -> bool {
    matches_tokens(&normalize_role(role), EDITOR_ROLE_TOKENS, "editor")
}

/// Whether the role is viewer-equivalent
pub fn is_viewer_role(role: Option<&str>) -> bool {
    matches_tokens(&normalize_role(role), VIEWER_ROLE_TOKENS, "viewer")
}

/// Whether the role is recognized at all; gates dashboard access
pub fn has_valid_role(role: Option<&str>) -> bool {
    is_admin_role(role) || is_editor_role(role) || is_viewer_role(role)
}

/// Whether the role passes a page's requirement
///
/// Admin is a superset of editor, so an editor requirement also admits admins.
pub fn has_required_role(role: Option<&str>, requirement: AccessRequirement) -> bool {
    match requirement {
        AccessRequirement::Admin => is_admin_role(role),
        AccessRequirement::Editor => is_admin_role(role) || is_editor_role(role),
        AccessRequirement::AnyRole => has_valid_role(role),
    }
}

impl RoleClass {
    /// Resolve a raw role string into its class; `None` when unrecognized
    pub fn resolve(role: Option<&str>) -> Option<Self> {
        if is_admin_role(role) {
            Some(RoleClass::Admin)
        } else if is_editor_role(role) {
            Some(RoleClass::Editor)
        } else if is_viewer_role(role) {
            Some(RoleClass::Viewer)
        } else {
            None
        }
    }

    /// Whether this class passes a page's requirement
    pub fn satisfies(self, requirement: AccessRequirement) -> bool {
        match requirement {
            AccessRequirement::Admin => self == RoleClass::Admin,
            AccessRequirement::Editor => matches!(self, RoleClass::Admin | RoleClass::Editor),
            AccessRequirement::AnyRole => true,
        }
    }
}
