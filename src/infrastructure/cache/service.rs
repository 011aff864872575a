//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching serialized standings documents.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the request flow (cache failures degrade to upstream fetches).
///
/// There is deliberately no delete operation: entries are only ever replaced
/// by a later `set` or dropped by TTL expiry.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache for tests/development
/// - [`crate::infrastructure::cache::NullCache`] - No-op fallback
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached document by key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss, expired entry, or backend error
    ///   (fail-open behavior)
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a document under `key` with the given expiry.
    ///
    /// Equivalent to `SET key value EX ttl_seconds`: any existing value is
    /// overwritten and its TTL reset.
    ///
    /// # Errors
    ///
    /// Production implementations log backend errors and return `Ok(())`
    /// rather than failing the request that triggered the write.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health check endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
