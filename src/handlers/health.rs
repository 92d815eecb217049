use axum::Json;
use axum::response::IntoResponse;

pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "edge-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
