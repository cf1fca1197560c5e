use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use applink_core::error::Result;
use applink_core::{AppLinkRecord, LinkStore, StorageError};
use async_trait::async_trait;
use tracing::debug;

const APP_LINKS_FILE: &str = "app-links.json";

/// JSON-file implementation of the [`LinkStore`] contract.
///
/// The whole collection lives in one pretty-printed JSON array. Writes go
/// to a temp file in the same directory and are renamed into place, so a
/// failed write leaves the prior persisted state intact. There is no
/// locking: concurrent writers race and the last rename wins.
#[derive(Debug, Clone)]
pub struct JsonFileLinkStore {
    path: PathBuf,
}

impl JsonFileLinkStore {
    /// Creates a store rooted at the given data directory. The directory
    /// is created on first write, not here.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(APP_LINKS_FILE),
        }
    }

    /// Path of the backing JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_atomic(&self, bytes: Vec<u8>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(crate::map_io_error)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await.map_err(crate::map_io_error)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(crate::map_io_error)?;
        Ok(())
    }
}

#[async_trait]
impl LinkStore for JsonFileLinkStore {
    async fn load_all(&self) -> Result<Vec<AppLinkRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // Never persisted yet: an empty collection, not an error.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(crate::map_io_error(err)),
        };

        serde_json::from_slice(&bytes).map_err(|err| {
            StorageError::InvalidData(format!(
                "failed to decode {}: {}",
                self.path.display(),
                err
            ))
        })
    }

    async fn save_all(&self, records: Vec<AppLinkRecord>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&records)
            .map_err(|err| StorageError::InvalidData(err.to_string()))?;

        self.write_atomic(bytes).await?;
        debug!(count = records.len(), path = %self.path.display(), "persisted app-link collection");
        Ok(())
    }
}
