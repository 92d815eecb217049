//! Edge gateway: admission control, service resolution and request
//! forwarding for the microservice fleet, with a bounded request log and
//! running counters for diagnostics.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod proxy;
pub mod rate_limit;
pub mod registry;
pub mod request_log;
pub mod stats;
pub mod state;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;

use state::GatewayState;

/// Build the gateway router over shared state.
pub fn router(state: Arc<GatewayState>) -> Router {
    let proxy = get(handlers::proxy_handler)
        .post(handlers::proxy_handler)
        .put(handlers::proxy_handler)
        .delete(handlers::proxy_handler)
        .patch(handlers::proxy_handler);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/status", get(handlers::status_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/v1/{service}/{*path}", proxy)
        .with_state(state)
}
