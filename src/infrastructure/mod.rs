//! Infrastructure layer: key-value store access and persistence.

pub mod kv;
pub mod persistence;
