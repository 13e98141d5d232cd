//! DTOs for the QR code management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{CodePatch, QrCode, QrStyle};

/// Request body for `POST /codes`.
///
/// A fully formed candidate record: the client assigns the id and the
/// creation timestamp (epoch millis), matching how records are minted in
/// the dashboard. `scanCount` is normally zero but may carry history when
/// importing.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCodeRequest {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, max = 64))]
    pub slug: String,

    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,

    pub created_at: i64,

    #[validate(range(min = 0))]
    pub scan_count: i64,

    #[serde(default)]
    pub last_scanned: Option<i64>,

    /// Rendering parameters; defaults apply when omitted.
    #[serde(default)]
    pub style: Option<QrStyle>,
}

impl CreateCodeRequest {
    pub fn into_code(self) -> QrCode {
        QrCode {
            id: self.id,
            title: self.title,
            slug: self.slug,
            target_url: self.target_url,
            created_at: self.created_at,
            scan_count: self.scan_count,
            last_scanned: self.last_scanned,
            style: self.style.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /codes/{id}`.
///
/// All fields are optional; only provided fields are changed. Scan
/// statistics cannot be modified through this endpoint.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCodeRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub slug: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub target_url: Option<String>,

    pub style: Option<QrStyle>,
}

impl UpdateCodeRequest {
    pub fn into_patch(self) -> CodePatch {
        CodePatch {
            title: self.title,
            slug: self.slug,
            target_url: self.target_url,
            style: self.style,
        }
    }
}

/// JSON representation of a record returned by the management endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub target_url: String,
    pub created_at: i64,
    pub scan_count: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_scanned: Option<i64>,

    pub style: QrStyle,
}

impl From<QrCode> for CodeResponse {
    fn from(code: QrCode) -> Self {
        Self {
            id: code.id,
            title: code.title,
            slug: code.slug,
            target_url: code.target_url,
            created_at: code.created_at,
            scan_count: code.scan_count,
            last_scanned: code.last_scanned,
            style: code.style,
        }
    }
}
