//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization (camelCase
//! wire names) and validator for input validation.

pub mod code;
pub mod health;
pub mod resolve;
