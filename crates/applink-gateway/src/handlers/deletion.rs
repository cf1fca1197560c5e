use crate::error::{AppError, Result};
use crate::model::{DeletionIntakeRequest, DeletionIntakeResponse};
use crate::state::AppState;
use applink_core::DeletionRequest;
use axum::extract::State;
use axum::Json;

/// Shape check matching the intake form's expectations: one `@` with a
/// non-empty local part, a domain containing an interior dot, and no
/// whitespace anywhere. Not full RFC validation on purpose.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rfind('.')
        .is_some_and(|dot| dot > 0 && dot < domain.len() - 1)
}

/// `POST /api/delete-account` — appends an account-deletion request to
/// the durable log for out-of-band processing.
pub async fn delete_account_handler(
    State(state): State<AppState>,
    Json(request): Json<DeletionIntakeRequest>,
) -> Result<Json<DeletionIntakeResponse>> {
    if request.username.trim().is_empty() || request.email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "username and email are required".to_string(),
        ));
    }
    if !looks_like_email(&request.email) {
        return Err(AppError::BadRequest(
            "a valid email address is required".to_string(),
        ));
    }

    let deletion = DeletionRequest::new(
        request.username,
        request.email,
        request.app,
        request.reason,
    );
    state.deletion_log().append(deletion).await?;

    Ok(Json(DeletionIntakeResponse {
        success: true,
        message: "Your deletion request has been received and will be processed within 30 days.",
    }))
}
