//! Session guard integration tests
//!
//! Drives `AuthGuard` with a scripted provider and the in-memory store through a
//! sequence of live, offline and logged-out checks.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::Step;
    use crate::common::{ScriptedSessionProvider, UserFactory};
    use dashboard_rbac::config::SessionConfig;
    use dashboard_rbac::{
        AccessRequirement, AuthGuard, KeyValueStore, MemoryStore, PermissionLevel, SessionSource,
    };
    use std::sync::Arc;

    fn guard_with(
        steps: Vec<Step>,
        config: &SessionConfig,
    ) -> (
        AuthGuard<ScriptedSessionProvider, Arc<MemoryStore>>,
        Arc<MemoryStore>,
    ) {
        let store = Arc::new(MemoryStore::new());
        let guard = AuthGuard::new(ScriptedSessionProvider::new(steps), store.clone(), config);
        (guard, store)
    }

    #[tokio::test]
    async fn test_offline_after_login_uses_snapshot() {
        let (guard, _store) = guard_with(
            vec![Step::User(UserFactory::editor()), Step::Offline],
            &SessionConfig::default(),
        );

        let live = guard.check(AccessRequirement::Editor).await;
        assert_eq!(live.source, SessionSource::Live);
        assert!(live.has_required_role);

        let cached = guard.check(AccessRequirement::Editor).await;
        assert_eq!(cached.source, SessionSource::Cached);
        assert!(cached.has_required_role);
        assert_eq!(cached.user, Some(UserFactory::editor()));
        assert!(cached.can_access_page("announcements"));
        assert!(!cached.can_access_page("settings"));
    }

    #[tokio::test]
    async fn test_logged_out_then_offline_has_no_user() {
        let (guard, store) = guard_with(
            vec![
                Step::User(UserFactory::admin()),
                Step::LoggedOut,
                Step::Offline,
            ],
            &SessionConfig::default(),
        );

        assert!(guard.check(AccessRequirement::Admin).await.has_required_role);
        assert!(!guard.check(AccessRequirement::Admin).await.is_authenticated());
        assert!(store.is_empty());

        let offline = guard.check(AccessRequirement::AnyRole).await;
        assert_eq!(offline.source, SessionSource::Missing);
        assert!(!offline.has_required_role);
    }

    #[tokio::test]
    async fn test_logout_clears_snapshot() {
        let config = SessionConfig::default();
        let (guard, store) = guard_with(vec![Step::User(UserFactory::viewer())], &config);

        guard.check(AccessRequirement::AnyRole).await;
        assert!(store.get(&config.snapshot_key).is_some());

        guard.logout().await.unwrap();
        assert!(store.get(&config.snapshot_key).is_none());

        // Script drained by logout: the next check is offline with nothing cached.
        let state = guard.check(AccessRequirement::AnyRole).await;
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_custom_snapshot_key() {
        let config = SessionConfig {
            snapshot_key: "admin-panel.user".to_string(),
            ..Default::default()
        };
        let (guard, store) = guard_with(vec![Step::User(UserFactory::moderator())], &config);

        let state = guard.check(AccessRequirement::AnyRole).await;
        // Moderators score 50 but are not a recognized dashboard role.
        assert_eq!(state.permission_level, PermissionLevel::Moderator);
        assert!(!state.has_required_role);
        assert!(store.get("admin-panel.user").is_some());
        assert!(store.get("dashboard.currentUser").is_none());
    }

    #[tokio::test]
    async fn test_arabic_admin_state() {
        let (guard, _store) = guard_with(
            vec![Step::User(UserFactory::arabic_admin())],
            &SessionConfig::default(),
        );

        let state = guard.check(AccessRequirement::Admin).await;
        assert!(state.is_admin);
        assert!(state.has_required_role);
        assert!(state.can_access_page("logs"));
        // Neither the level table nor the permission table know this synonym.
        assert_eq!(state.permission_level, PermissionLevel::Basic);
        assert!(!state.permissions.can_view_logs);
    }
}
