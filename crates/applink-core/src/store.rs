use crate::error::Result;
use crate::record::AppLinkRecord;
use async_trait::async_trait;

/// Durable storage for the whole app-link collection.
///
/// The record count is expected to be small (tens, not millions), so the
/// contract is whole-collection read and replace rather than an indexed
/// storage engine. Callers read the full collection, compute the next full
/// collection, and write it back. There is no locking: concurrent writers
/// race and the later `save_all` wins.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Loads every persisted record, in insertion order.
    /// Returns an empty vec if no collection has ever been persisted.
    async fn load_all(&self) -> Result<Vec<AppLinkRecord>>;

    /// Replaces the entire persisted collection, creating the storage
    /// location if absent. Either fully succeeds or leaves the prior
    /// persisted state intact.
    async fn save_all(&self, records: Vec<AppLinkRecord>) -> Result<()>;
}
