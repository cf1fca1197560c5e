use thiserror::Error;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors raised by a [`LinkStore`](crate::store::LinkStore) backend.
///
/// Storage errors are never retried anywhere in the stack; they propagate
/// unchanged to the HTTP boundary.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
