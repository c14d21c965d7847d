//! Authorization for the admin dashboard
//!
//! Raw role strings from the user record are resolved here into role classes,
//! permission levels, permission records and page-access decisions.

pub mod page_access;
pub mod rbac;
pub mod session;

// Re-export commonly used types
pub use page_access::PageAccess;
pub use rbac::{
    AccessRequirement, Menu, PermissionLevel, PermissionRecord, RoleClass, get_permissions,
    get_user_permission_level, has_required_role, has_valid_role, is_admin_role, is_editor_role,
    is_viewer_role,
};
pub use session::{
    AuthGuard, AuthState, KeyValueStore, MemoryStore, SessionProvider, SessionSource,
    SessionUser, SnapshotCache,
};
