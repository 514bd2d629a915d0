use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

/// Liveness probe
///
/// Does not touch the database: the store is external and a failing store
/// should not take the process out of rotation.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "API is running",
    })
}
