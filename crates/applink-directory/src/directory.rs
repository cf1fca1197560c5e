use crate::error::Result;
use applink_core::AppLinkRecord;
use async_trait::async_trait;
use serde::Deserialize;

/// A candidate record submitted by the admin caller.
///
/// Lacks `createdAt` deliberately: that field is server-assigned on first
/// creation and carried forward on updates, never caller-supplied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppLinkSubmission {
    pub id: String,
    pub name: String,
    pub app_store_url: String,
    pub play_store_url: String,
    /// Defaults to `true` when omitted on create; on update the omitted
    /// value also resolves to `true` (the caller always sends it).
    pub active: Option<bool>,
}

/// Result of an upsert. The `created` flag only selects the caller's
/// display message; it is not a structural distinction in the data model.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertOutcome {
    pub record: AppLinkRecord,
    pub created: bool,
}

/// The directory contract consumed by the admin surface and the public
/// redirect resolver.
#[async_trait]
pub trait Directory: Send + Sync + 'static {
    /// Returns every record, active or not, in insertion order.
    /// The admin view must see inactive records too.
    async fn list_all(&self) -> Result<Vec<AppLinkRecord>>;

    /// Creates the record if its id is unseen, otherwise updates it in
    /// place, preserving position and `createdAt`.
    async fn upsert(&self, submission: AppLinkSubmission) -> Result<UpsertOutcome>;

    /// Deletes the record with the given id. `NotFound` leaves the
    /// persisted collection untouched.
    async fn remove(&self, id: &str) -> Result<()>;

    /// Returns the record with the given id if it exists AND is active.
    /// An inactive record is indistinguishable from an absent one.
    async fn find_active_by_id(&self, id: &str) -> Result<AppLinkRecord>;
}
