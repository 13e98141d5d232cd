//! Registry trait for slug and record index access.

use crate::domain::entities::QrCode;
use crate::error::AppError;
use async_trait::async_trait;

/// Index structures that make slug resolution possible.
///
/// Maintains three mappings in the underlying store: `slug -> id`,
/// `id -> record body`, and the set of all known ids, plus the per-record
/// scan counters. Invariant: every stored record's slug entry points back
/// at that record's id, and no two records share a slug. The registry
/// itself does not enforce this; callers order their writes so a fault
/// mid-sequence never leaves a resolvable slug without a record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvRegistry`] - key-value store implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeRegistry: Send + Sync {
    /// Looks up the record id owning a slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_id_by_slug(&self, slug: &str) -> Result<Option<String>, AppError>;

    /// Loads a record by id, hydrated with its live scan counter and
    /// last-scan timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<QrCode>, AppError>;

    /// Loads every known record.
    ///
    /// Ids whose body fails to load are dropped from the result; each drop
    /// is logged with the offending id so registry inconsistencies are
    /// visible without failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_all(&self) -> Result<Vec<QrCode>, AppError>;

    /// Writes the record body.
    ///
    /// Only the CRUD-owned fields are persisted; scan statistics live in
    /// separate counter keys and are never rewritten here.
    async fn store(&self, code: &QrCode) -> Result<(), AppError>;

    /// Seeds the scan counter and last-scan timestamp for a new record.
    ///
    /// A non-zero `scan_count` supports importing records that already
    /// carry history.
    async fn init_scan_stats(
        &self,
        id: &str,
        scan_count: i64,
        last_scanned: Option<i64>,
    ) -> Result<(), AppError>;

    /// Atomically increments the scan counter and stamps the scan time.
    ///
    /// Returns the new total. The counter update is a single atomic store
    /// operation; the timestamp write rides alongside without atomicity
    /// and may be stale under concurrent scans.
    async fn record_scan(&self, id: &str, at_millis: i64) -> Result<i64, AppError>;

    /// Points a slug at a record id.
    async fn register_slug(&self, slug: &str, id: &str) -> Result<(), AppError>;

    /// Removes a slug pointer.
    async fn unregister_slug(&self, slug: &str) -> Result<(), AppError>;

    /// Adds an id to the all-ids set.
    async fn add_id(&self, id: &str) -> Result<(), AppError>;

    /// Removes an id from the all-ids set.
    async fn remove_id(&self, id: &str) -> Result<(), AppError>;

    /// Deletes the record body and its scan counter keys.
    async fn remove(&self, id: &str) -> Result<(), AppError>;

    /// Checks if the backing store is reachable.
    async fn health_check(&self) -> bool;
}
