use crate::model::HealthResponse;
use axum::Json;

/// Liveness probe; also names the service so a misrouted check is
/// obvious from the body alone.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "applink-gateway",
    })
}
