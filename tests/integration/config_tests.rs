//! Configuration integration tests

#[cfg(test)]
mod tests {
    use dashboard_rbac::config::{Config, DashboardConfig, LoggingConfig, SessionConfig, Validate};
    use dashboard_rbac::{AccessRequirement, AuthGuard, MemoryStore};
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::common::fixtures::Step;
    use crate::common::{ScriptedSessionProvider, UserFactory};

    #[tokio::test]
    async fn test_file_config_drives_guard() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"session:\n  enable_fallback: false\n")
            .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let guard = AuthGuard::new(
            ScriptedSessionProvider::new(vec![Step::User(UserFactory::admin()), Step::Offline]),
            MemoryStore::new(),
            config.session(),
        );

        assert!(guard.check(AccessRequirement::Admin).await.has_required_role);
        // Fallback disabled: the snapshot written above is not consulted.
        assert!(!guard.check(AccessRequirement::Admin).await.is_authenticated());
    }

    #[test]
    fn test_invalid_sections_rejected() {
        let config = DashboardConfig {
            session: SessionConfig {
                snapshot_key: String::new(),
                ..Default::default()
            },
            logging: LoggingConfig::default(),
        };
        assert!(config.validate().is_err());
        assert!(Config::from_yaml("logging:\n  level: chatty\n").is_err());
    }

    #[test]
    fn test_yaml_roundtrip_preserves_values() {
        let config = Config::from_yaml(
            "session:\n  snapshot_key: panel.user\n  snapshot_max_age: 900\nlogging:\n  json: true\n",
        )
        .unwrap();

        let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
        assert_eq!(reparsed.session().snapshot_max_age, 900);
    }
}
