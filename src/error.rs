//! Session store error types

use std::fmt;

/// Errors that can occur during session store operations
///
/// A missing session is not an error: lookups report absence as `Ok(None)`.
/// An error here means the store itself failed.
#[derive(Debug)]
pub enum SessionError {
    /// Error from the session store backend
    StoreError(String),
    /// Error during serialization/deserialization of a session record
    SerializationError(String),
    /// The backend does not support this operation
    Unsupported(&'static str),
    /// Redis error (when redis-store feature is enabled)
    #[cfg(feature = "redis-store")]
    RedisError(redis::RedisError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::StoreError(msg) => write!(f, "Session store error: {}", msg),
            SessionError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            SessionError::Unsupported(op) => {
                write!(f, "Operation not supported by this store: {}", op)
            }
            #[cfg(feature = "redis-store")]
            SessionError::RedisError(e) => write!(f, "Redis error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(feature = "redis-store")]
impl From<redis::RedisError> for SessionError {
    fn from(err: redis::RedisError) -> Self {
        SessionError::RedisError(err)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::SerializationError(err.to_string())
    }
}
