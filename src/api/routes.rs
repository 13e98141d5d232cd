//! API route configuration.
//!
//! The management endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_code_handler, delete_code_handler, list_codes_handler, update_code_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Record management routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /codes`      - List all records, newest first
/// - `POST   /codes`      - Create a record
/// - `PUT    /codes/{id}` - Partially update a record
/// - `DELETE /codes/{id}` - Delete a record (idempotent)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/codes", get(list_codes_handler).post(create_code_handler))
        .route(
            "/codes/{id}",
            put(update_code_handler).delete(delete_code_handler),
        )
}
