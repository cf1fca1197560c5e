//! Storage backends for the app-link directory.
//!
//! The durable form is a single JSON document holding an array of
//! records, kept in an application-managed data directory. An in-memory
//! backend exists for tests and local development.

pub mod deletion_log;
pub mod json_file;
pub mod memory;

pub use deletion_log::JsonFileDeletionLog;
pub use json_file::JsonFileLinkStore;
pub use memory::InMemoryLinkStore;

use applink_core::StorageError;

pub(crate) fn map_io_error(err: std::io::Error) -> StorageError {
    StorageError::Unavailable(err.to_string())
}
