//! Redis Stack session store
//!
//! Sessions are stored as RedisJSON documents, matching the layout used by
//! JSON-based express-session stores:
//! - Key: `prefix + session_id` (default prefix: "session:")
//! - Value: the session record as a JSON document at the root path `$`
//! - TTL: applied with EXPIRE after each save, when configured

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, JsonAsyncCommands};
use std::sync::Arc;

use super::SessionStore;
use crate::error::SessionError;
use crate::record::SessionRecord;

/// Session store backed by Redis Stack (RedisJSON)
///
/// Records are written with `JSON.SET key $ ...`, so the stored documents
/// are plain JSON objects readable by any other client of the same
/// database, including Node.js express-session stores using the same key
/// prefix.
///
/// The connection is a shared handle: the store never opens, closes, or
/// pools connections beyond what the `ConnectionManager` it was given
/// already does.
///
/// # Example
///
/// ```rust,ignore
/// use redis_stack_session::RedisStackStore;
///
/// let client = redis::Client::open("redis://127.0.0.1/")?;
/// let store = RedisStackStore::new(client)
///     .await?
///     .with_ttl(86400);
/// ```
pub struct RedisStackStore {
    conn: Arc<ConnectionManager>,
    prefix: String,
    ttl: Option<u64>,
}

impl RedisStackStore {
    /// Create a new Redis Stack store with default settings
    ///
    /// - Prefix: "session:"
    /// - TTL: none (sessions never expire through this store)
    pub async fn new(client: redis::Client) -> Result<Self, SessionError> {
        let conn = ConnectionManager::new(client).await?;
        Ok(Self::from_connection_manager(conn))
    }

    /// Create a new Redis Stack store from a connection string
    pub async fn from_url(url: &str) -> Result<Self, SessionError> {
        let client = redis::Client::open(url)
            .map_err(|e| SessionError::StoreError(format!("Failed to create Redis client: {}", e)))?;
        Self::new(client).await
    }

    /// Create a new Redis Stack store from an existing connection manager
    pub fn from_connection_manager(conn: ConnectionManager) -> Self {
        Self {
            conn: Arc::new(conn),
            prefix: "session:".to_string(),
            ttl: None,
        }
    }

    /// Build with a custom key prefix (default: "session:")
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Build with an expiration duration in seconds
    ///
    /// When set, every save re-applies this TTL to the session key and
    /// `touch` refreshes it.
    pub fn with_ttl(mut self, ttl_secs: u64) -> Self {
        self.ttl = Some(ttl_secs);
        self
    }

    /// Make a storage key from session ID
    fn make_key(&self, sid: &str) -> String {
        format!("{}{}", self.prefix, sid)
    }

    async fn keys_with_prefix(&self) -> Result<Vec<String>, SessionError> {
        let mut conn = (*self.conn).clone();
        let pattern = format!("{}*", self.prefix);
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(&pattern)
            .query_async(&mut conn)
            .await?;
        Ok(keys)
    }
}

impl Clone for RedisStackStore {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
            prefix: self.prefix.clone(),
            ttl: self.ttl,
        }
    }
}

#[async_trait]
impl SessionStore for RedisStackStore {
    async fn get(&self, sid: &str) -> Result<Option<SessionRecord>, SessionError> {
        let key = self.make_key(sid);
        let mut conn = (*self.conn).clone();

        let raw: Option<String> = conn.json_get(&key, "$").await?;

        match raw {
            Some(json) => {
                // JSON.GET with the `$` path wraps the document in an array
                let mut found: Vec<SessionRecord> = serde_json::from_str(&json)?;
                Ok(found.pop())
            }
            None => Ok(None),
        }
    }

    /// Save, then (if configured) expire.
    ///
    /// The value write and the expiration write are two sequential
    /// commands, not a transaction: a crash or concurrent deletion between
    /// them can leave a record without its intended TTL.
    async fn set(&self, sid: &str, record: &SessionRecord) -> Result<(), SessionError> {
        let key = self.make_key(sid);
        let mut conn = (*self.conn).clone();

        conn.json_set::<_, _, _, ()>(&key, "$", record).await?;

        if let Some(ttl) = self.ttl {
            let _: bool = conn.expire(&key, ttl as i64).await?;
        }

        Ok(())
    }

    async fn destroy(&self, sid: &str) -> Result<(), SessionError> {
        let key = self.make_key(sid);
        let mut conn = (*self.conn).clone();

        // UNLINK reclaims memory asynchronously and ignores missing keys
        conn.unlink::<_, ()>(&key).await?;
        Ok(())
    }

    async fn touch(&self, sid: &str) -> Result<(), SessionError> {
        let ttl = match self.ttl {
            Some(ttl) => ttl,
            None => return Ok(()),
        };

        let key = self.make_key(sid);
        let mut conn = (*self.conn).clone();

        // EXPIRE returns false when the key doesn't exist; a vanished
        // session is not an error here
        let _: bool = conn.expire(&key, ttl as i64).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        let keys = self.keys_with_prefix().await?;

        if !keys.is_empty() {
            let mut conn = (*self.conn).clone();
            conn.unlink::<_, ()>(keys).await?;
        }

        Ok(())
    }

    async fn length(&self) -> Result<usize, SessionError> {
        let keys = self.keys_with_prefix().await?;
        Ok(keys.len())
    }

    async fn ids(&self) -> Result<Vec<String>, SessionError> {
        let keys = self.keys_with_prefix().await?;

        let prefix_len = self.prefix.len();
        Ok(keys
            .into_iter()
            .map(|k| k[prefix_len..].to_string())
            .collect())
    }

    async fn all(&self) -> Result<Vec<SessionRecord>, SessionError> {
        let keys = self.keys_with_prefix().await?;
        let mut conn = (*self.conn).clone();

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            let raw: Option<String> = conn.json_get(key, "$").await?;
            if let Some(json) = raw {
                if let Ok(found) = serde_json::from_str::<Vec<SessionRecord>>(&json) {
                    records.extend(found);
                }
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    // Tests require a running Redis Stack instance (RedisJSON module loaded)
    // Run with: cargo test --features redis-store -- --ignored

    use super::*;

    async fn store_with_prefix(prefix: &str) -> RedisStackStore {
        let store = RedisStackStore::from_url("redis://127.0.0.1/")
            .await
            .unwrap()
            .with_prefix(prefix);
        store.clear().await.unwrap();
        store
    }

    async fn raw_connection() -> ConnectionManager {
        let client = redis::Client::open("redis://127.0.0.1/").unwrap();
        ConnectionManager::new(client).await.unwrap()
    }

    fn sample_record() -> SessionRecord {
        let mut record = SessionRecord::new();
        record.set("user", "alice");
        record.set("views", 3);
        record
    }

    #[tokio::test]
    #[ignore]
    async fn set_get_touch_destroy() {
        let store = store_with_prefix("rss-basic:").await.with_ttl(3600);
        let record = sample_record();

        store.set("test-id", &record).await.unwrap();

        let retrieved = store.get("test-id").await.unwrap();
        assert_eq!(retrieved, Some(record));

        store.touch("test-id").await.unwrap();

        store.destroy("test-id").await.unwrap();
        let retrieved = store.get("test-id").await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    #[ignore]
    async fn get_missing_is_none_not_error() {
        let store = store_with_prefix("rss-missing:").await;
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    #[ignore]
    async fn destroy_missing_succeeds() {
        let store = store_with_prefix("rss-destroy:").await;
        store.destroy("never-existed").await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn set_replaces_not_merges() {
        let store = store_with_prefix("rss-replace:").await;

        let mut first = SessionRecord::new();
        first.set("a", 1);
        let mut second = SessionRecord::new();
        second.set("b", 2);

        store.set("test-id", &first).await.unwrap();
        store.set("test-id", &second).await.unwrap();

        let retrieved = store.get("test-id").await.unwrap().unwrap();
        assert!(!retrieved.contains("a"));
        assert_eq!(retrieved.get::<i32>("b"), Some(2));
    }

    #[tokio::test]
    #[ignore]
    async fn set_applies_configured_ttl() {
        let store = store_with_prefix("rss-ttl:").await.with_ttl(42);

        store.set("foo", &sample_record()).await.unwrap();

        let mut conn = raw_connection().await;
        let ttl: i64 = redis::cmd("TTL")
            .arg("rss-ttl:foo")
            .query_async(&mut conn)
            .await
            .unwrap();
        assert!(ttl > 0 && ttl <= 42, "unexpected TTL: {}", ttl);
    }

    #[tokio::test]
    #[ignore]
    async fn set_without_ttl_leaves_key_persistent() {
        let store = store_with_prefix("rss-nottl:").await;

        store.set("foo", &sample_record()).await.unwrap();

        let mut conn = raw_connection().await;
        let ttl: i64 = redis::cmd("TTL")
            .arg("rss-nottl:foo")
            .query_async(&mut conn)
            .await
            .unwrap();
        assert_eq!(ttl, -1);

        store.clear().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn touch_without_ttl_is_noop() {
        let store = store_with_prefix("rss-touch:").await;

        store.set("foo", &sample_record()).await.unwrap();
        store.touch("foo").await.unwrap();

        let mut conn = raw_connection().await;
        let ttl: i64 = redis::cmd("TTL")
            .arg("rss-touch:foo")
            .query_async(&mut conn)
            .await
            .unwrap();
        assert_eq!(ttl, -1);

        store.clear().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn bulk_operations() {
        let store = store_with_prefix("rss-bulk:").await;

        store.set("one", &sample_record()).await.unwrap();
        store.set("two", &sample_record()).await.unwrap();

        assert_eq!(store.length().await.unwrap(), 2);

        let mut ids = store.ids().await.unwrap();
        ids.sort();
        assert_eq!(ids, vec!["one".to_string(), "two".to_string()]);

        assert_eq!(store.all().await.unwrap().len(), 2);

        store.clear().await.unwrap();
        assert_eq!(store.length().await.unwrap(), 0);
    }
}
