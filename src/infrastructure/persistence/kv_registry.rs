//! Key-value store implementation of the code registry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};

use crate::domain::entities::{QrCode, QrStyle};
use crate::domain::repositories::CodeRegistry;
use crate::error::AppError;
use crate::infrastructure::kv::{KvError, KvStore};

/// Set key holding every known record id.
const ALL_IDS_KEY: &str = "codes";

/// Serialized record body as written to the store.
///
/// Holds only the CRUD-owned fields. Scan statistics live in dedicated
/// counter keys so the resolver can increment them atomically instead of
/// rewriting the whole body; a record rewritten by an update therefore
/// never clobbers scans that landed concurrently.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCode {
    id: String,
    title: String,
    slug: String,
    target_url: String,
    created_at: i64,
    style: QrStyle,
}

impl StoredCode {
    fn from_code(code: &QrCode) -> Self {
        Self {
            id: code.id.clone(),
            title: code.title.clone(),
            slug: code.slug.clone(),
            target_url: code.target_url.clone(),
            created_at: code.created_at,
            style: code.style.clone(),
        }
    }

    fn into_code(self, scan_count: i64, last_scanned: Option<i64>) -> QrCode {
        QrCode {
            id: self.id,
            title: self.title,
            slug: self.slug,
            target_url: self.target_url,
            created_at: self.created_at,
            scan_count,
            last_scanned,
            style: self.style,
        }
    }
}

/// Registry over a [`KvStore`] backend.
///
/// # Key layout
///
/// - `code:{id}` - serialized record body
/// - `slug:{slug}` - owning record id
/// - `codes` - set of all known ids
/// - `scans:{id}` - scan counter, updated via atomic increment
/// - `last_scan:{id}` - epoch-millis timestamp of the latest scan
pub struct KvRegistry<S: KvStore> {
    store: Arc<S>,
}

impl<S: KvStore> KvRegistry<S> {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn code_key(id: &str) -> String {
        format!("code:{}", id)
    }

    fn slug_key(slug: &str) -> String {
        format!("slug:{}", slug)
    }

    fn scans_key(id: &str) -> String {
        format!("scans:{}", id)
    }

    fn last_scan_key(id: &str) -> String {
        format!("last_scan:{}", id)
    }

    /// Loads the scan counter and last-scan timestamp for each id, in order.
    async fn scan_stats(&self, ids: &[String]) -> Result<Vec<(i64, Option<i64>)>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let counter_keys: Vec<String> = ids.iter().map(|id| Self::scans_key(id)).collect();
        let last_scan_keys: Vec<String> = ids.iter().map(|id| Self::last_scan_key(id)).collect();

        let counters = self.store.mget(&counter_keys).await.map_err(map_kv_error)?;
        let last_scans = self
            .store
            .mget(&last_scan_keys)
            .await
            .map_err(map_kv_error)?;

        Ok(counters
            .into_iter()
            .zip(last_scans)
            .map(|(count, last)| {
                (
                    count.and_then(|raw| raw.parse().ok()).unwrap_or(0),
                    last.and_then(|raw| raw.parse().ok()),
                )
            })
            .collect())
    }
}

#[async_trait]
impl<S: KvStore> CodeRegistry for KvRegistry<S> {
    async fn find_id_by_slug(&self, slug: &str) -> Result<Option<String>, AppError> {
        self.store
            .get(&Self::slug_key(slug))
            .await
            .map_err(map_kv_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<QrCode>, AppError> {
        let Some(raw) = self
            .store
            .get(&Self::code_key(id))
            .await
            .map_err(map_kv_error)?
        else {
            return Ok(None);
        };

        let stored: StoredCode = serde_json::from_str(&raw).map_err(|e| {
            error!(id, error = %e, "Stored record body is not valid JSON");
            AppError::internal("Corrupt record body", serde_json::json!({ "id": id }))
        })?;

        let ids = [id.to_string()];
        let stats = self.scan_stats(&ids).await?;
        let (scan_count, last_scanned) = stats.into_iter().next().unwrap_or((0, None));

        Ok(Some(stored.into_code(scan_count, last_scanned)))
    }

    async fn list_all(&self) -> Result<Vec<QrCode>, AppError> {
        let ids = self.store.smembers(ALL_IDS_KEY).await.map_err(map_kv_error)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let body_keys: Vec<String> = ids.iter().map(|id| Self::code_key(id)).collect();
        let bodies = self.store.mget(&body_keys).await.map_err(map_kv_error)?;

        // Ids whose body is missing or unreadable are dropped from the
        // listing, but each drop is logged so the inconsistency is visible.
        let mut kept_ids = Vec::with_capacity(ids.len());
        let mut stored = Vec::with_capacity(ids.len());
        for (id, body) in ids.into_iter().zip(bodies) {
            match body {
                Some(raw) => match serde_json::from_str::<StoredCode>(&raw) {
                    Ok(code) => {
                        kept_ids.push(id);
                        stored.push(code);
                    }
                    Err(e) => {
                        warn!(id, error = %e, "Dropping record with unreadable body from listing")
                    }
                },
                None => warn!(id, "Dropping id with missing record body from listing"),
            }
        }

        let stats = self.scan_stats(&kept_ids).await?;

        Ok(stored
            .into_iter()
            .zip(stats)
            .map(|(code, (scan_count, last_scanned))| code.into_code(scan_count, last_scanned))
            .collect())
    }

    async fn store(&self, code: &QrCode) -> Result<(), AppError> {
        let raw = serde_json::to_string(&StoredCode::from_code(code)).map_err(|e| {
            AppError::internal(
                "Failed to serialize record",
                serde_json::json!({ "id": code.id, "reason": e.to_string() }),
            )
        })?;

        self.store
            .set(&Self::code_key(&code.id), &raw)
            .await
            .map_err(map_kv_error)
    }

    async fn init_scan_stats(
        &self,
        id: &str,
        scan_count: i64,
        last_scanned: Option<i64>,
    ) -> Result<(), AppError> {
        self.store
            .set(&Self::scans_key(id), &scan_count.to_string())
            .await
            .map_err(map_kv_error)?;

        if let Some(last) = last_scanned {
            self.store
                .set(&Self::last_scan_key(id), &last.to_string())
                .await
                .map_err(map_kv_error)?;
        }

        Ok(())
    }

    async fn record_scan(&self, id: &str, at_millis: i64) -> Result<i64, AppError> {
        let total = self
            .store
            .incr_by(&Self::scans_key(id), 1)
            .await
            .map_err(map_kv_error)?;

        // Timestamp freshness is best-effort; the counter is authoritative.
        self.store
            .set(&Self::last_scan_key(id), &at_millis.to_string())
            .await
            .map_err(map_kv_error)?;

        Ok(total)
    }

    async fn register_slug(&self, slug: &str, id: &str) -> Result<(), AppError> {
        self.store
            .set(&Self::slug_key(slug), id)
            .await
            .map_err(map_kv_error)
    }

    async fn unregister_slug(&self, slug: &str) -> Result<(), AppError> {
        self.store
            .del(&Self::slug_key(slug))
            .await
            .map_err(map_kv_error)
    }

    async fn add_id(&self, id: &str) -> Result<(), AppError> {
        self.store
            .sadd(ALL_IDS_KEY, id)
            .await
            .map_err(map_kv_error)
    }

    async fn remove_id(&self, id: &str) -> Result<(), AppError> {
        self.store
            .srem(ALL_IDS_KEY, id)
            .await
            .map_err(map_kv_error)
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        self.store
            .del(&Self::code_key(id))
            .await
            .map_err(map_kv_error)?;
        self.store
            .del(&Self::scans_key(id))
            .await
            .map_err(map_kv_error)?;
        self.store
            .del(&Self::last_scan_key(id))
            .await
            .map_err(map_kv_error)
    }

    async fn health_check(&self) -> bool {
        self.store.ping().await
    }
}

/// Maps a low-level store failure to the generic internal error surfaced
/// to clients. The cause is logged server-side only.
fn map_kv_error(e: KvError) -> AppError {
    error!(error = %e, "Key-value store error");
    AppError::internal("Store error", serde_json::json!({}))
}
