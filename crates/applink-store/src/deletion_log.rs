use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use applink_core::error::Result;
use applink_core::{DeletionRequest, StorageError};
use tracing::info;

const DELETION_REQUESTS_FILE: &str = "deletion-requests.json";

/// Append-only JSON log of account-deletion requests.
///
/// Same durable form as the link collection: one pretty-printed JSON
/// array, rewritten whole on every append via temp-file-and-rename.
#[derive(Debug, Clone)]
pub struct JsonFileDeletionLog {
    path: PathBuf,
}

impl JsonFileDeletionLog {
    /// Creates a log rooted at the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(DELETION_REQUESTS_FILE),
        }
    }

    /// Appends one request to the log.
    pub async fn append(&self, request: DeletionRequest) -> Result<()> {
        let mut requests = self.load_all().await?;
        let request_id = request.id;
        requests.push(request);

        let bytes = serde_json::to_vec_pretty(&requests)
            .map_err(|err| StorageError::InvalidData(err.to_string()))?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(crate::map_io_error)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await.map_err(crate::map_io_error)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(crate::map_io_error)?;

        info!(request_id, total = requests.len(), "recorded deletion request");
        Ok(())
    }

    /// Loads every logged request, oldest first.
    pub async fn load_all(&self) -> Result<Vec<DeletionRequest>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
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
}
