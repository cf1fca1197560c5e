use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored app-link record in the directory.
///
/// The wire and persisted form uses camelCase field names
/// (`appStoreUrl`, `playStoreUrl`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLinkRecord {
    /// Unique identifier, used both as storage key and as the public
    /// path segment. Immutable after creation.
    pub id: String,
    /// Human-readable display label.
    pub name: String,
    /// App Store listing URL, opened for iOS visitors.
    pub app_store_url: String,
    /// Play Store listing URL, opened for Android visitors.
    pub play_store_url: String,
    /// Whether the public redirect flow honors lookups for this record.
    /// Does not affect admin CRUD visibility.
    pub active: bool,
    /// Set exactly once at first creation and carried forward on every
    /// subsequent update to the same `id`.
    pub created_at: Timestamp,
}
