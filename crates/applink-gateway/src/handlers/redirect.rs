use crate::pages;
use crate::state::AppState;
use applink_core::Platform;
use applink_directory::DirectoryError;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error};

/// `GET /app/{id}` — the public redirect page.
///
/// Classifies the visitor's platform from the `User-Agent` header and
/// renders one of three states: a timed store redirect (mobile), a
/// landing page with both store links (desktop), or a not-found page.
/// Failures never surface as raw error codes.
pub async fn app_redirect_handler(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let platform = Platform::classify(user_agent);

    let record = match state.directory().find_active_by_id(&id).await {
        Ok(record) => record,
        Err(DirectoryError::NotFound(_)) => {
            debug!(id = %id, "app link not found or inactive");
            return (StatusCode::NOT_FOUND, Html(pages::not_found())).into_response();
        }
        Err(err) => {
            error!(id = %id, error = %err, "redirect lookup failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::service_error()))
                .into_response();
        }
    };

    debug!(id = %id, ?platform, "resolved app link");
    let html = match platform {
        Platform::Ios => pages::redirecting(&record, &record.app_store_url, "App Store"),
        Platform::Android => pages::redirecting(&record, &record.play_store_url, "Google Play"),
        Platform::Other => pages::landing(&record),
    };
    Html(html).into_response()
}
