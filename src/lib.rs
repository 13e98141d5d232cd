//! # QR Redirect
//!
//! A dynamic QR-code management service built with Axum and Redis.
//!
//! Administrators create records binding a short public *slug* to a
//! destination URL plus display metadata; printed QR images encode
//! `/resolve/{slug}`, and each resolution records a scan before handing
//! the destination back to the caller.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Key-value store access
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Slug-unique records with re-indexing on slug change
//! - Atomic scan counting (no lost increments under concurrent traffic)
//! - Shared admin token authentication for the management endpoints
//! - Public, unauthenticated resolution path for scanned codes
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export REDIS_URL="redis://localhost:6379/0"
//! export ADMIN_TOKEN="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, CodeService, ResolverService};
    pub use crate::domain::entities::{CodePatch, EcLevel, QrCode, QrStyle};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
