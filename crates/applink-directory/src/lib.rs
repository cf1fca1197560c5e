//! The app-link directory service.
//!
//! Sits between the storage backend and the two callers: the admin CRUD
//! surface and the public redirect flow. All input validation and
//! business rules live here; the store only persists.

pub mod directory;
pub mod error;
pub mod service;

pub use directory::{AppLinkSubmission, Directory, UpsertOutcome};
pub use error::{DirectoryError, Result};
pub use service::DirectoryService;
