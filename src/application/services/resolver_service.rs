//! Slug resolution service: destination lookup plus scan recording.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::warn;

use crate::domain::repositories::CodeRegistry;
use crate::error::AppError;

/// Translates a public slug into its destination URL while recording the
/// visit.
///
/// The scan counter is bumped through the registry's atomic increment, so
/// concurrent resolutions of the same slug cannot lose counts. The
/// last-scan timestamp is written alongside without atomicity; under
/// concurrent scans the latest writer wins, which is acceptable for a
/// freshness indicator.
pub struct ResolverService {
    registry: Arc<dyn CodeRegistry>,
}

impl ResolverService {
    /// Creates a new resolver service.
    pub fn new(registry: Arc<dyn CodeRegistry>) -> Self {
        Self { registry }
    }

    /// Resolves a slug to its destination URL, recording one scan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is unknown or its
    /// pointer targets a missing record (a registry inconsistency, logged
    /// as a warning). Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        let id = self
            .registry
            .find_id_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Not found", json!({ "slug": slug })))?;

        let code = self.registry.find_by_id(&id).await?.ok_or_else(|| {
            warn!(slug, id, "Slug points at a missing record");
            AppError::not_found("Not found", json!({ "slug": slug }))
        })?;

        self.registry
            .record_scan(&id, Utc::now().timestamp_millis())
            .await?;

        Ok(code.target_url)
    }
}
