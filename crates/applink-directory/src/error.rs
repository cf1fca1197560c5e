use applink_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// One or more submission constraints failed. Nothing reached the
    /// store; each entry names one failed constraint.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// No record with the given id. For the public lookup path this also
    /// covers records that exist but are inactive.
    #[error("app link not found: {0}")]
    NotFound(String),
    /// Underlying read/write failure, passed through untouched.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
