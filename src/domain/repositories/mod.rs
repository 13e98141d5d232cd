//! Repository traits abstracting the storage backend.

mod registry;

pub use registry::CodeRegistry;

#[cfg(test)]
pub use registry::MockCodeRegistry;
