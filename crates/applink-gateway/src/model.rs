use applink_core::AppLinkRecord;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct UpsertResponse {
    pub success: bool,
    /// `"created"` or `"updated"`; only used by the admin UI to pick a
    /// display message.
    pub message: &'static str,
    pub data: AppLinkRecord,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DeletionIntakeRequest {
    pub username: String,
    pub email: String,
    pub app: Option<String>,
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct DeletionIntakeResponse {
    pub success: bool,
    pub message: &'static str,
}
