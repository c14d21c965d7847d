//! RBAC type definitions

use serde::{Deserialize, Serialize};

/// Canonical role class derived from a free-form role string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleClass {
    /// Full dashboard access
    Admin,
    /// Content management (the "moderator" tier of the numeric scale)
    Editor,
    /// Read-only access
    Viewer,
}

impl std::fmt::Display for RoleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleClass::Admin => write!(f, "admin"),
            RoleClass::Editor => write!(f, "editor"),
            RoleClass::Viewer => write!(f, "viewer"),
        }
    }
}

/// Dashboard menu identifiers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Menu {
    Dashboard,
    Users,
    Content,
    Settings,
    Logs,
    Messages,
    Categories,
    Announcements,
    Ads,
}

impl Menu {
    /// Every menu, in display order
    pub const ALL: [Menu; 9] = [
        Menu::Dashboard,
        Menu::Users,
        Menu::Content,
        Menu::Settings,
        Menu::Logs,
        Menu::Messages,
        Menu::Categories,
        Menu::Announcements,
        Menu::Ads,
    ];

    /// Identifier used by the front end
    pub fn as_str(&self) -> &'static str {
        match self {
            Menu::Dashboard => "dashboard",
            Menu::Users => "users",
            Menu::Content => "content",
            Menu::Settings => "settings",
            Menu::Logs => "logs",
            Menu::Messages => "messages",
            Menu::Categories => "categories",
            Menu::Announcements => "announcements",
            Menu::Ads => "ads",
        }
    }
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Menu {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Menu::ALL
            .iter()
            .copied()
            .find(|menu| menu.as_str() == s)
            .ok_or_else(|| format!("Invalid menu: {}", s))
    }
}

/// Capability and menu-visibility record for a role class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRecord {
    /// May open the system log viewer
    pub can_view_logs: bool,
    /// May edit other users
    pub can_edit_users: bool,
    /// May delete platform data
    pub can_delete_data: bool,
    /// May change dashboard settings
    pub can_manage_settings: bool,
    /// Menus shown to the role, in display order
    pub allowed_menus: Vec<Menu>,
}

impl PermissionRecord {
    /// The static record for a role class
    pub fn for_class(class: RoleClass) -> Self {
        match class {
            RoleClass::Admin => Self {
                can_view_logs: true,
                can_edit_users: true,
                can_delete_data: true,
                can_manage_settings: true,
                allowed_menus: Menu::ALL.to_vec(),
            },
            RoleClass::Editor => Self {
                can_view_logs: false,
                can_edit_users: false,
                can_delete_data: false,
                can_manage_settings: false,
                allowed_menus: vec![
                    Menu::Dashboard,
                    Menu::Content,
                    Menu::Messages,
                    Menu::Categories,
                    Menu::Announcements,
                    Menu::Ads,
                ],
            },
            RoleClass::Viewer => Self {
                can_view_logs: false,
                can_edit_users: false,
                can_delete_data: false,
                can_manage_settings: false,
                allowed_menus: vec![Menu::Dashboard],
            },
        }
    }

    /// Whether the menu is visible under this record
    pub fn allows_menu(&self, menu: Menu) -> bool {
        self.allowed_menus.contains(&menu)
    }

    /// Menu identifiers as the front end expects them
    pub fn allowed_menu_names(&self) -> Vec<&'static str> {
        self.allowed_menus.iter().map(Menu::as_str).collect()
    }
}

/// Coarse numeric privilege score, independent of [`PermissionRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum PermissionLevel {
    /// No role at all
    None,
    /// Any role that is neither admin nor moderator
    Basic,
    /// Moderator-equivalent roles
    Moderator,
    /// Admin-equivalent roles
    Admin,
}

impl PermissionLevel {
    /// Numeric score
    pub fn value(self) -> u32 {
        match self {
            PermissionLevel::None => 0,
            PermissionLevel::Basic => 10,
            PermissionLevel::Moderator => 50,
            PermissionLevel::Admin => 100,
        }
    }
}

impl From<PermissionLevel> for u32 {
    fn from(level: PermissionLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u32> for PermissionLevel {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PermissionLevel::None),
            10 => Ok(PermissionLevel::Basic),
            50 => Ok(PermissionLevel::Moderator),
            100 => Ok(PermissionLevel::Admin),
            other => Err(format!("Invalid permission level: {}", other)),
        }
    }
}

/// Role requirement a dashboard page declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRequirement {
    /// Only admins pass
    Admin,
    /// Editors and admins pass
    Editor,
    /// Any recognized role passes
    #[default]
    AnyRole,
}
