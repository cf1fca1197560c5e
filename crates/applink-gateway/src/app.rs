use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    app_redirect_handler, delete_account_handler, delete_link_handler, health_handler,
    home_handler, list_links_handler, upsert_link_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(home_handler))
            .route("/health", get(health_handler))
            .route(
                "/api/app-links",
                get(list_links_handler)
                    .post(upsert_link_handler)
                    .delete(delete_link_handler),
            )
            .route("/api/delete-account", post(delete_account_handler))
            .route("/app/{id}", get(app_redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
