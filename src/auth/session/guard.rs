//! Session guard: resolves the current user into an access decision

use super::provider::SessionProvider;
use super::snapshot::{SessionUser, SnapshotCache};
use super::store::KeyValueStore;
use crate::auth::page_access::PageAccess;
use crate::auth::rbac::{
    AccessRequirement, PermissionLevel, PermissionRecord, RoleClass, get_permissions,
    get_user_permission_level, has_required_role, is_admin_role, is_editor_role, is_viewer_role,
};
use crate::config::SessionConfig;
use crate::utils::error::Result;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Where the user behind an [`AuthState`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSource {
    /// Live session fetch
    Live,
    /// Cached snapshot after a failed live fetch
    Cached,
    /// No user
    Missing,
}

/// Access decision for the current user against one requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub role_class: Option<RoleClass>,
    pub is_admin: bool,
    pub is_editor: bool,
    pub is_viewer: bool,
    pub has_required_role: bool,
    pub permission_level: PermissionLevel,
    pub permissions: PermissionRecord,
    pub page_access: PageAccess,
    pub source: SessionSource,
}

impl AuthState {
    /// Evaluate a user against a requirement
    pub fn resolve(
        user: Option<SessionUser>,
        source: SessionSource,
        requirement: AccessRequirement,
    ) -> Self {
        let Some(user) = user else {
            return Self::unauthenticated();
        };

        let role = user.role.as_deref();
        let is_admin = is_admin_role(role);
        let page_access = PageAccess::new(is_admin, user.allowed_pages.clone());

        Self {
            role_class: RoleClass::resolve(role),
            is_admin,
            is_editor: is_editor_role(role),
            is_viewer: is_viewer_role(role),
            has_required_role: has_required_role(role, requirement),
            permission_level: get_user_permission_level(role),
            permissions: get_permissions(role),
            page_access,
            source,
            user: Some(user),
        }
    }

    /// State with no user: every flag false, viewer permissions, no pages
    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            role_class: None,
            is_admin: false,
            is_editor: false,
            is_viewer: false,
            has_required_role: false,
            permission_level: PermissionLevel::None,
            permissions: PermissionRecord::for_class(RoleClass::Viewer),
            page_access: PageAccess::denied(),
            source: SessionSource::Missing,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the user may open `page`
    pub fn can_access_page(&self, page: &str) -> bool {
        self.is_authenticated() && self.page_access.can_access_page(page)
    }
}

/// Resolves the current session into [`AuthState`]s
///
/// Falls back to the cached snapshot when the live fetch fails and the fallback
/// is enabled. Never fails: errors degrade to an unauthenticated state.
pub struct AuthGuard<P, S> {
    provider: P,
    cache: SnapshotCache<S>,
    enable_fallback: bool,
}

impl<P, S> AuthGuard<P, S>
where
    P: SessionProvider,
    S: KeyValueStore,
{
    pub fn new(provider: P, store: S, config: &SessionConfig) -> Self {
        Self {
            provider,
            cache: SnapshotCache::new(store, config),
            enable_fallback: config.enable_fallback,
        }
    }

    pub fn cache(&self) -> &SnapshotCache<S> {
        &self.cache
    }

    /// Current user and where it came from
    pub async fn current_user(&self) -> (Option<SessionUser>, SessionSource) {
        match self.provider.current_user().await {
            Ok(Some(user)) => {
                if let Err(e) = self.cache.save(&user) {
                    warn!("Failed to cache session snapshot: {}", e);
                }
                (Some(user), SessionSource::Live)
            }
            Ok(None) => {
                debug!("No live session, clearing snapshot");
                self.cache.clear();
                (None, SessionSource::Missing)
            }
            Err(e) if self.enable_fallback => {
                warn!("Live session check failed, trying snapshot: {}", e);
                match self.cache.load() {
                    Some(user) => (Some(user), SessionSource::Cached),
                    None => (None, SessionSource::Missing),
                }
            }
            Err(e) => {
                warn!("Live session check failed: {}", e);
                (None, SessionSource::Missing)
            }
        }
    }

    /// Evaluate the current user against a requirement
    pub async fn check(&self, requirement: AccessRequirement) -> AuthState {
        let (user, source) = self.current_user().await;
        let state = AuthState::resolve(user, source, requirement);

        debug!(
            "Access check {:?}: granted={} source={:?}",
            requirement, state.has_required_role, state.source
        );
        state
    }

    /// End the session; the snapshot is cleared even if the provider fails
    pub async fn logout(&self) -> Result<()> {
        self.cache.clear();
        self.provider.logout().await?;

        info!("Session logged out");
        Ok(())
    }
}
