//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /resolve/{slug}` - Slug resolution (public; this is the link QR
//!   images encode)
//! - `GET /health`         - Store health check (public)
//! - `/codes`, `/codes/{id}` - Record management (Bearer token required)
//!
//! Unsupported verbs on known paths return `405 Method Not Allowed` from
//! the router itself.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on the management routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, resolve_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/resolve/{slug}", get(resolve_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
