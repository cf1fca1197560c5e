use applink_core::error::Result;
use applink_core::{AppLinkRecord, LinkStore};
use async_trait::async_trait;
use parking_lot::RwLock;

/// In-memory implementation of the [`LinkStore`] trait.
///
/// A plain `RwLock<Vec<_>>` rather than a map: the collection contract is
/// ordered whole-collection replace, and the record count is small.
/// Used by tests and the `in-memory` gateway backend.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    records: RwLock<Vec<AppLinkRecord>>,
}

impl InMemoryLinkStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    pub fn with_records(records: Vec<AppLinkRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn load_all(&self) -> Result<Vec<AppLinkRecord>> {
        Ok(self.records.read().clone())
    }

    async fn save_all(&self, records: Vec<AppLinkRecord>) -> Result<()> {
        *self.records.write() = records;
        Ok(())
    }
}
