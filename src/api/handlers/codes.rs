//! Handlers for QR code management endpoints (list, create, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::code::{CodeResponse, CreateCodeRequest, UpdateCodeRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all records, newest first.
///
/// # Endpoint
///
/// `GET /codes` (auth required)
///
/// Records are sorted by creation time descending. Ids whose body cannot
/// be loaded are dropped from the result and logged server-side.
pub async fn list_codes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CodeResponse>>, AppError> {
    let codes = state.code_service.list_codes().await?;

    Ok(Json(codes.into_iter().map(CodeResponse::from).collect()))
}

/// Creates a record from a fully formed candidate.
///
/// # Endpoint
///
/// `POST /codes` (auth required)
///
/// # Errors
///
/// - `400` - malformed JSON or missing/invalid fields
/// - `409` - slug already owned by a different record
pub async fn create_code_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CodeResponse>), AppError> {
    let Json(payload) = payload.map_err(bad_payload)?;
    payload.validate()?;

    let stored = state.code_service.create_code(payload.into_code()).await?;

    Ok((StatusCode::CREATED, Json(CodeResponse::from(stored))))
}

/// Partially updates a record.
///
/// # Endpoint
///
/// `PUT /codes/{id}` (auth required)
///
/// Only provided fields are changed. A slug change re-indexes the slug
/// pointer; scan statistics cannot be modified here.
///
/// # Errors
///
/// - `400` - malformed JSON or an invalid merged field
/// - `404` - unknown id
/// - `409` - new slug already owned by a different record
pub async fn update_code_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCodeRequest>, JsonRejection>,
) -> Result<Json<CodeResponse>, AppError> {
    let Json(payload) = payload.map_err(bad_payload)?;
    payload.validate()?;

    let updated = state
        .code_service
        .update_code(&id, payload.into_patch())
        .await?;

    Ok(Json(CodeResponse::from(updated)))
}

/// Deletes a record along with its slug pointer and id-set membership.
///
/// # Endpoint
///
/// `DELETE /codes/{id}` (auth required)
///
/// Idempotent: returns `204 No Content` whether or not the id existed.
pub async fn delete_code_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.code_service.delete_code(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Maps a body deserialization failure to the 400 error envelope.
fn bad_payload(rejection: JsonRejection) -> AppError {
    AppError::bad_request("Invalid payload", json!({ "reason": rejection.body_text() }))
}
