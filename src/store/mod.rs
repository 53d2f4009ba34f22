//! Session store implementations

mod detached;
mod memory;
mod traits;

pub use detached::SessionStoreExt;
pub use memory::MemoryStore;
pub use traits::SessionStore;

#[cfg(feature = "redis-store")]
mod redis_stack;

#[cfg(feature = "redis-store")]
pub use redis_stack::RedisStackStore;
