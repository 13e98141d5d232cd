//! Handler for public slug resolution.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a slug to its destination URL and records one scan.
///
/// # Endpoint
///
/// `GET /resolve/{slug}` (public)
///
/// This path is intentionally unauthenticated: it is the link embedded in
/// printed QR codes. The caller performs the actual redirect with the
/// returned URL.
///
/// # Errors
///
/// Returns `404` if the slug is unknown or its record is missing.
pub async fn resolve_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let target_url = state.resolver_service.resolve(&slug).await?;

    Ok(Json(ResolveResponse { target_url }))
}
