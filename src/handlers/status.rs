use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;

use crate::state::GatewayState;

pub async fn status_handler(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
    let services: serde_json::Map<String, serde_json::Value> = state
        .registry
        .iter()
        .map(|(name, url)| (name.to_string(), json!(url)))
        .collect();

    Json(json!({
        "services": services,
        "stats": state.stats.snapshot(),
        "rate_limit": {
            "max_requests": state.rate_limiter.limit(),
            "window_seconds": state.rate_limiter.window().as_secs(),
        },
        "recent_requests": state.request_log.len(),
    }))
}
