use crate::error::{AppError, Result};
use crate::model::{DeleteParams, DeleteResponse, UpsertResponse};
use crate::state::AppState;
use applink_core::AppLinkRecord;
use applink_directory::AppLinkSubmission;
use axum::extract::{Query, State};
use axum::Json;

/// `GET /api/app-links` — the full collection, inactive records included.
pub async fn list_links_handler(State(state): State<AppState>) -> Result<Json<Vec<AppLinkRecord>>> {
    let records = state.directory().list_all().await?;
    Ok(Json(records))
}

/// `POST /api/app-links` — create-or-update keyed by `id`.
pub async fn upsert_link_handler(
    State(state): State<AppState>,
    Json(submission): Json<AppLinkSubmission>,
) -> Result<Json<UpsertResponse>> {
    let outcome = state.directory().upsert(submission).await?;
    Ok(Json(UpsertResponse {
        success: true,
        message: if outcome.created { "created" } else { "updated" },
        data: outcome.record,
    }))
}

/// `DELETE /api/app-links?id=<id>` — hard delete.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("id query parameter is required".to_string()))?;

    state.directory().remove(&id).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: format!("app link '{id}' deleted"),
    }))
}
