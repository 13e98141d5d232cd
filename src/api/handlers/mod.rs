//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod codes;
pub mod health;
pub mod resolve;

pub use codes::{create_code_handler, delete_code_handler, list_codes_handler, update_code_handler};
pub use health::health_handler;
pub use resolve::resolve_handler;
