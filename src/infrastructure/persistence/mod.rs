//! Storage-backed implementations of the repository traits.

mod kv_registry;

pub use kv_registry::KvRegistry;
