//! Key-value store accessors.
//!
//! Provides a [`KvStore`] trait with two implementations:
//! - [`RedisStore`] - production Redis backend
//! - [`MemoryStore`] - in-process backend for tests and local development

mod memory_store;
mod redis_store;
mod store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
pub use store::{KvError, KvResult, KvStore};
