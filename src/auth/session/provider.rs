//! Live session collaborator

use super::snapshot::SessionUser;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the live session, e.g. a Parse client holding the session token
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The logged-in user; `Ok(None)` when nobody is logged in
    async fn current_user(&self) -> Result<Option<SessionUser>>;

    /// End the live session
    async fn logout(&self) -> Result<()>;
}
