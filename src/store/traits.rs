//! Session store trait

use async_trait::async_trait;

use crate::error::SessionError;
use crate::record::SessionRecord;

/// Trait for session storage backends
///
/// Modeled on the express-session store interface. Implementations store
/// session records under the key `prefix + session_id` and apply their
/// configured TTL, if any, on every save.
///
/// The expiration duration is part of the store's configuration, fixed at
/// construction, so `set` and `touch` take no per-call TTL.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Get a session record by ID
    ///
    /// Returns `Ok(None)` if no record exists for the ID. A miss is never
    /// an error.
    async fn get(&self, sid: &str) -> Result<Option<SessionRecord>, SessionError>;

    /// Save a session record, replacing any existing value for the ID
    ///
    /// When the store is configured with a TTL, the key's expiration is
    /// (re-)set on every save.
    async fn set(&self, sid: &str, record: &SessionRecord) -> Result<(), SessionError>;

    /// Destroy/delete a session
    ///
    /// Deleting an ID that does not exist succeeds.
    async fn destroy(&self, sid: &str) -> Result<(), SessionError>;

    /// Refresh a session's expiration without rewriting its payload
    ///
    /// A no-op when the store has no TTL configured, or when the session
    /// does not exist.
    async fn touch(&self, sid: &str) -> Result<(), SessionError>;

    /// Delete all sessions under this store's prefix (optional)
    async fn clear(&self) -> Result<(), SessionError> {
        Err(SessionError::Unsupported("clear"))
    }

    /// Count all sessions under this store's prefix (optional)
    async fn length(&self) -> Result<usize, SessionError> {
        Err(SessionError::Unsupported("length"))
    }

    /// Get all session IDs under this store's prefix (optional)
    async fn ids(&self) -> Result<Vec<String>, SessionError> {
        Err(SessionError::Unsupported("ids"))
    }

    /// Get all session records under this store's prefix (optional)
    async fn all(&self) -> Result<Vec<SessionRecord>, SessionError> {
        Err(SessionError::Unsupported("all"))
    }
}
