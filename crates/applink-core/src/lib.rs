//! Core types and traits for the app-link directory.
//!
//! This crate provides the shared record types, the storage contract,
//! and the platform classification used by both the directory service
//! and the public redirect flow.

pub mod deletion;
pub mod error;
pub mod platform;
pub mod record;
pub mod store;

pub use deletion::DeletionRequest;
pub use error::StorageError;
pub use platform::Platform;
pub use record::AppLinkRecord;
pub use store::LinkStore;
