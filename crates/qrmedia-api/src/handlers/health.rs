use axum::{response::IntoResponse, Json};

/// Liveness probe - process is running.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "alive" }))
}
