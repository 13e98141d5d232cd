//! Key-value store trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during key-value operations.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store command error: {0}")]
    Command(#[from] redis::RedisError),

    #[error("value at '{key}' is not an integer")]
    NotAnInteger { key: String },
}

/// Result type for key-value operations.
pub type KvResult<T> = Result<T, KvError>;

/// Thin accessor over the external key-value store.
///
/// Mirrors the store's own command set: single-key reads and writes, bulk
/// reads, set membership, and an atomic counter increment. No retries and
/// no multi-key atomicity beyond what individual commands provide; a fault
/// between two calls leaves whatever the first call wrote.
///
/// # Implementations
///
/// - [`crate::infrastructure::kv::RedisStore`] - production Redis backend
/// - [`crate::infrastructure::kv::MemoryStore`] - in-process backend for tests
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Reads a string value. `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Writes a string value, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> KvResult<()>;

    /// Deletes a key. Deleting an absent key is not an error.
    async fn del(&self, key: &str) -> KvResult<()>;

    /// Atomically adds `delta` to the integer at `key` and returns the new
    /// value. An absent key counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::NotAnInteger`] (or the store's equivalent) when
    /// the existing value does not parse as an integer.
    async fn incr_by(&self, key: &str, delta: i64) -> KvResult<i64>;

    /// Bulk read. The result has one entry per requested key, in order,
    /// with `None` for absent keys.
    async fn mget(&self, keys: &[String]) -> KvResult<Vec<Option<String>>>;

    /// Returns all members of a set. An absent set is empty.
    async fn smembers(&self, set: &str) -> KvResult<Vec<String>>;

    /// Adds a member to a set.
    async fn sadd(&self, set: &str, member: &str) -> KvResult<()>;

    /// Removes a member from a set. Removing an absent member is not an error.
    async fn srem(&self, set: &str, member: &str) -> KvResult<()>;

    /// Checks if the store is reachable.
    async fn ping(&self) -> bool;
}
