//! Record CRUD service: create, update, delete, and list QR code records.

use std::sync::Arc;

use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::domain::entities::{CodePatch, QrCode};
use crate::domain::repositories::CodeRegistry;
use crate::error::AppError;

/// Allowed slug characters. Slugs are embedded verbatim in redirect URLs,
/// so the charset is restricted to URL-safe tokens.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Maximum slug length in characters.
const SLUG_MAX_LENGTH: usize = 64;

/// Service for managing QR code records.
///
/// Owns every write to the registry except scan counting, and keeps the
/// slug index consistent across creates, slug changes, and deletes. Write
/// sequences are ordered so a fault between two store calls can never
/// leave a resolvable slug pointing at a missing record.
pub struct CodeService {
    registry: Arc<dyn CodeRegistry>,
}

impl CodeService {
    /// Creates a new code service.
    pub fn new(registry: Arc<dyn CodeRegistry>) -> Self {
        Self { registry }
    }

    /// Lists every record, newest first by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_codes(&self) -> Result<Vec<QrCode>, AppError> {
        let mut codes = self.registry.list_all().await?;
        codes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(codes)
    }

    /// Stores a fully formed candidate record.
    ///
    /// The caller assigns the id and creation timestamp; a non-zero
    /// `scan_count` is accepted so records with prior history can be
    /// imported. Re-posting the same id with its own slug acts as an
    /// overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is empty or
    /// malformed, [`AppError::Conflict`] if the slug belongs to a
    /// different record.
    pub async fn create_code(&self, code: QrCode) -> Result<QrCode, AppError> {
        if code.id.is_empty() {
            return Err(AppError::bad_request("Record id must not be empty", json!({})));
        }
        validate_fields(&code)?;

        if let Some(owner) = self.registry.find_id_by_slug(&code.slug).await?
            && owner != code.id
        {
            return Err(AppError::conflict(
                "Slug already exists",
                json!({ "slug": code.slug }),
            ));
        }

        // Body first: until the slug pointer lands, the record is simply
        // unresolvable rather than dangling.
        self.registry.store(&code).await?;
        self.registry
            .init_scan_stats(&code.id, code.scan_count, code.last_scanned)
            .await?;
        self.registry.register_slug(&code.slug, &code.id).await?;
        self.registry.add_id(&code.id).await?;

        Ok(code)
    }

    /// Merges a partial update onto an existing record.
    ///
    /// A slug change re-indexes the slug pointer: the new pointer is
    /// installed before the old one is removed, so the record stays
    /// resolvable throughout.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id,
    /// [`AppError::Validation`] if a merged field is empty or malformed,
    /// [`AppError::Conflict`] if the new slug belongs to a different record.
    pub async fn update_code(&self, id: &str, patch: CodePatch) -> Result<QrCode, AppError> {
        let existing = self
            .registry
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Record not found", json!({ "id": id })))?;

        let old_slug = existing.slug.clone();
        let mut merged = existing;
        merged.apply(patch);

        validate_fields(&merged)?;

        if merged.slug != old_slug {
            if let Some(owner) = self.registry.find_id_by_slug(&merged.slug).await?
                && owner != id
            {
                return Err(AppError::conflict(
                    "Slug already exists",
                    json!({ "slug": merged.slug }),
                ));
            }

            self.registry.store(&merged).await?;
            self.registry.register_slug(&merged.slug, id).await?;
            self.registry.unregister_slug(&old_slug).await?;
        } else {
            self.registry.store(&merged).await?;
        }

        Ok(merged)
    }

    /// Deletes a record and all of its index entries.
    ///
    /// Idempotent: deleting an unknown id is a silent no-op. The slug
    /// pointer goes first so the record stops resolving before any other
    /// state disappears.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_code(&self, id: &str) -> Result<(), AppError> {
        let Some(existing) = self.registry.find_by_id(id).await? else {
            return Ok(());
        };

        self.registry.unregister_slug(&existing.slug).await?;
        self.registry.remove_id(id).await?;
        self.registry.remove(id).await?;

        Ok(())
    }
}

/// Validates the mutable fields of a record (used for both candidate
/// records and merged updates).
fn validate_fields(code: &QrCode) -> Result<(), AppError> {
    if code.title.is_empty() {
        return Err(AppError::bad_request("Title must not be empty", json!({})));
    }

    if code.slug.is_empty() || code.slug.len() > SLUG_MAX_LENGTH {
        return Err(AppError::bad_request(
            format!("Slug must be 1-{} characters", SLUG_MAX_LENGTH),
            json!({ "slug": code.slug }),
        ));
    }

    if !SLUG_REGEX.is_match(&code.slug) {
        return Err(AppError::bad_request(
            "Slug can only contain letters, digits, hyphens, and underscores",
            json!({ "slug": code.slug }),
        ));
    }

    if url::Url::parse(&code.target_url).is_err() {
        return Err(AppError::bad_request(
            "Invalid target URL",
            json!({ "targetUrl": code.target_url }),
        ));
    }

    if code.scan_count < 0 {
        return Err(AppError::bad_request(
            "Scan count must not be negative",
            json!({ "scanCount": code.scan_count }),
        ));
    }

    Ok(())
}
