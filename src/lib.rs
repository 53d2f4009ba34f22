//! # redis-stack-session
//!
//! Session persistence backed by Redis Stack's RedisJSON module, with an
//! express-session style store contract.
//!
//! Session records are opaque JSON objects stored one document per session
//! under the key `prefix + session_id` (default prefix: `"session:"`), with
//! an optional expiration applied on every save. Documents are written at
//! the JSON root, so they stay readable by any other client of the same
//! database — including Node.js express-session stores sharing the prefix.
//!
//! ## Features
//!
//! - **Async store contract**: get, set, destroy, and a TTL-only touch,
//!   plus bulk clear/length/ids/all
//! - **Redis Stack backend**: `JSON.GET`/`JSON.SET` documents, `EXPIRE` for
//!   TTLs, `UNLINK` for deletion
//! - **Memory backend**: for development and tests
//! - **Detached mutations**: fire-and-forget saves and deletes that log
//!   failures instead of swallowing them
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use redis_stack_session::{RedisStackStore, SessionRecord, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = redis::Client::open("redis://127.0.0.1/")?;
//!     let store = RedisStackStore::new(client)
//!         .await?
//!         .with_ttl(86400);
//!
//!     let mut record = SessionRecord::new();
//!     record.set("user", "alice");
//!
//!     store.set("7bb2bd6c", &record).await?;
//!     let found = store.get("7bb2bd6c").await?;
//!     assert!(found.is_some());
//!
//!     store.destroy("7bb2bd6c").await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod record;
pub mod store;

pub use error::SessionError;
pub use record::SessionRecord;
pub use store::{MemoryStore, SessionStore, SessionStoreExt};

#[cfg(feature = "redis-store")]
pub use store::RedisStackStore;
