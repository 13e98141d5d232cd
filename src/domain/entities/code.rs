//! QR code entity binding a slug to a destination URL.

use super::style::QrStyle;

/// A managed QR code record.
///
/// Binds a unique public `slug` to a destination URL plus display metadata
/// and scan statistics. `id` and `created_at` are fixed at creation;
/// `scan_count` and `last_scanned` are owned by the resolver and never
/// touched by CRUD updates. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct QrCode {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub target_url: String,
    pub created_at: i64,
    pub scan_count: i64,
    pub last_scanned: Option<i64>,
    pub style: QrStyle,
}

impl QrCode {
    /// Applies a partial update, leaving `None` fields unchanged.
    ///
    /// Scan statistics are deliberately not part of [`CodePatch`].
    pub fn apply(&mut self, patch: CodePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(target_url) = patch.target_url {
            self.target_url = target_url;
        }
        if let Some(style) = patch.style {
            self.style = style;
        }
    }
}

/// Partial update for an existing record.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct CodePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub target_url: Option<String>,
    pub style: Option<QrStyle>,
}
