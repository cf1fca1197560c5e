pub mod deletion;
pub mod health;
pub mod home;
pub mod links;
pub mod redirect;

pub use deletion::delete_account_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use links::{delete_link_handler, list_links_handler, upsert_link_handler};
pub use redirect::app_redirect_handler;
