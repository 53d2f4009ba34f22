//! In-memory session store
//!
//! This is primarily for development and testing.
//! For production, use RedisStackStore or another persistent store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::SessionStore;
use crate::error::SessionError;
use crate::record::SessionRecord;

struct StoredSession {
    record: SessionRecord,
    expires_at: Option<Instant>,
}

impl StoredSession {
    fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(exp) => exp <= now,
            None => false,
        }
    }
}

/// In-memory session store
///
/// Warning: This store is not suitable for production use because:
/// - Sessions are lost on restart
/// - Sessions are not shared across multiple server instances
/// - Memory usage grows with number of sessions
pub struct MemoryStore {
    sessions: Arc<RwLock<HashMap<String, StoredSession>>>,
    prefix: String,
    ttl: Option<u64>,
}

impl MemoryStore {
    /// Create a new memory store with the default prefix ("session:")
    /// and no expiration
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            prefix: "session:".to_string(),
            ttl: None,
        }
    }

    /// Build with a custom key prefix
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Build with an expiration duration in seconds, applied on every save
    pub fn with_ttl(mut self, ttl_secs: u64) -> Self {
        self.ttl = Some(ttl_secs);
        self
    }

    /// Make a storage key from session ID
    fn make_key(&self, sid: &str) -> String {
        format!("{}{}", self.prefix, sid)
    }

    fn expiry_from_now(&self) -> Option<Instant> {
        self.ttl.map(|secs| Instant::now() + Duration::from_secs(secs))
    }

    /// Clean up expired sessions
    pub fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write();
        let now = Instant::now();
        sessions.retain(|_, stored| !stored.is_expired(now));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            prefix: self.prefix.clone(),
            ttl: self.ttl,
        }
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, sid: &str) -> Result<Option<SessionRecord>, SessionError> {
        let key = self.make_key(sid);
        let sessions = self.sessions.read();

        match sessions.get(&key) {
            Some(stored) if !stored.is_expired(Instant::now()) => Ok(Some(stored.record.clone())),
            _ => Ok(None),
        }
    }

    async fn set(&self, sid: &str, record: &SessionRecord) -> Result<(), SessionError> {
        let key = self.make_key(sid);
        let stored = StoredSession {
            record: record.clone(),
            expires_at: self.expiry_from_now(),
        };

        self.sessions.write().insert(key, stored);
        Ok(())
    }

    async fn destroy(&self, sid: &str) -> Result<(), SessionError> {
        let key = self.make_key(sid);
        self.sessions.write().remove(&key);
        Ok(())
    }

    async fn touch(&self, sid: &str) -> Result<(), SessionError> {
        if self.ttl.is_none() {
            return Ok(());
        }

        let key = self.make_key(sid);
        let mut sessions = self.sessions.write();

        if let Some(stored) = sessions.get_mut(&key) {
            stored.expires_at = self.expiry_from_now();
        }

        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.sessions.write().clear();
        Ok(())
    }

    async fn length(&self) -> Result<usize, SessionError> {
        self.cleanup_expired();
        Ok(self.sessions.read().len())
    }

    async fn ids(&self) -> Result<Vec<String>, SessionError> {
        self.cleanup_expired();
        let sessions = self.sessions.read();
        let prefix_len = self.prefix.len();
        Ok(sessions.keys().map(|k| k[prefix_len..].to_string()).collect())
    }

    async fn all(&self) -> Result<Vec<SessionRecord>, SessionError> {
        self.cleanup_expired();
        let sessions = self.sessions.read();
        Ok(sessions.values().map(|s| s.record.clone()).collect())
    }
}
