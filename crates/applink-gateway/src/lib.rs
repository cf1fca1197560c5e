//! HTTP gateway for the app-link directory.
//!
//! Serves the admin CRUD JSON API, the public `/app/{id}` redirect page,
//! the account-deletion intake endpoint, and a health endpoint.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod pages;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
