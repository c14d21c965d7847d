//! Cached snapshot of the last-known session user
//!
//! A single-key read-through cache: populated after every successful live
//! session fetch, cleared on logout, on parse failure and on expiry.

use super::store::KeyValueStore;
use crate::config::SessionConfig;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// The parts of a user record the dashboard reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Record id
    #[serde(rename = "objectId")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form role string, unvalidated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Explicit page allow-list
    #[serde(default)]
    pub allowed_pages: Vec<String>,
}

impl SessionUser {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: None,
            role: None,
            allowed_pages: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_allowed_pages<I, T>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.allowed_pages = pages.into_iter().map(Into::into).collect();
        self
    }
}

/// Stored form of the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedSession {
    pub user: SessionUser,
    pub cached_at: DateTime<Utc>,
}

impl CachedSession {
    /// Whether the snapshot is older than `max_age` at `now`
    pub fn is_expired(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        chrono::Duration::from_std(max_age)
            .is_ok_and(|limit| now.signed_duration_since(self.cached_at) > limit)
    }
}

/// Snapshot cache over an injected store
pub struct SnapshotCache<S> {
    store: S,
    key: String,
    max_age: Option<Duration>,
}

impl<S: KeyValueStore> SnapshotCache<S> {
    pub fn new(store: S, config: &SessionConfig) -> Self {
        Self {
            store,
            key: config.snapshot_key.clone(),
            max_age: config.max_age(),
        }
    }

    /// Storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save the user as the last-known session
    pub fn save(&self, user: &SessionUser) -> Result<()> {
        self.save_at(user, Utc::now())
    }

    pub fn save_at(&self, user: &SessionUser, now: DateTime<Utc>) -> Result<()> {
        let cached = CachedSession {
            user: user.clone(),
            cached_at: now,
        };
        let raw = serde_json::to_string(&cached)?;
        self.store.set(&self.key, raw)?;

        debug!("Cached session snapshot for user {}", user.id);
        Ok(())
    }

    /// Last-known user, if a valid and unexpired snapshot exists
    pub fn load(&self) -> Option<SessionUser> {
        self.load_at(Utc::now())
    }

    pub fn load_at(&self, now: DateTime<Utc>) -> Option<SessionUser> {
        let raw = self.store.get(&self.key)?;

        let cached: CachedSession = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                warn!("Discarding unreadable session snapshot: {}", e);
                self.clear();
                return None;
            }
        };

        if let Some(max_age) = self.max_age {
            if cached.is_expired(max_age, now) {
                debug!("Session snapshot from {} expired", cached.cached_at);
                self.clear();
                return None;
            }
        }

        Some(cached.user)
    }

    /// Drop the snapshot
    pub fn clear(&self) {
        self.store.remove(&self.key);
    }
}
