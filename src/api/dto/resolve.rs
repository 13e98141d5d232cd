//! DTO for the slug resolution endpoint.

use serde::Serialize;

/// Response body for `GET /resolve/{slug}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub target_url: String,
}
