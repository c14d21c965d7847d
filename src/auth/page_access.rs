//! Page-level access from an admin flag and an explicit page allow-list

use serde::{Deserialize, Serialize};

/// Page visibility for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAccess {
    /// Resolved admin flag
    pub is_admin: bool,
    /// Explicit page allow-list from the user record
    #[serde(default)]
    pub allowed_pages: Vec<String>,
}

impl PageAccess {
    pub fn new(is_admin: bool, allowed_pages: Vec<String>) -> Self {
        Self {
            is_admin,
            allowed_pages,
        }
    }

    /// Access that denies every page
    pub fn denied() -> Self {
        Self::default()
    }

    /// Whether the user may open `page`
    ///
    /// An admin without an allow-list sees everything. A non-empty allow-list
    /// restricts admins and non-admins alike. A non-admin without one sees nothing.
    pub fn can_access_page(&self, page: &str) -> bool {
        if self.allowed_pages.is_empty() {
            return self.is_admin;
        }

        self.allowed_pages.iter().any(|allowed| allowed == page)
    }
}
