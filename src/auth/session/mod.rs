//! Session guarding
//!
//! The live session is owned by an external collaborator ([`SessionProvider`]);
//! the last-known user is kept in an injected [`KeyValueStore`] so it can stand in
//! when the live check is unavailable.

mod guard;
mod provider;
mod snapshot;
mod store;

pub use guard::{AuthGuard, AuthState, SessionSource};
pub use provider::SessionProvider;
pub use snapshot::{CachedSession, SessionUser, SnapshotCache};
pub use store::{KeyValueStore, MemoryStore};
