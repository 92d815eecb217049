use axum::Json;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

use crate::metrics::{FAILED_TOTAL, PROXIED_TOTAL, RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUESTS_TOTAL};
use crate::request_log::RequestRecord;
use crate::state::GatewayState;

// Upper bound on a single upstream round trip
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// The closed set of ways a gateway request fails. Display strings are the
/// client-facing `detail` messages.
#[derive(Debug, Error)]
pub enum ProxyFailure {
    #[error("Rate limit exceeded. Try again later.")]
    RateLimited,

    #[error("Service '{service}' not found. Available: {available:?}")]
    ServiceNotFound {
        service: String,
        available: Vec<&'static str>,
    },

    #[error("Service '{service}' is unavailable")]
    UpstreamUnavailable { service: String },

    #[error("Gateway error: {message}")]
    GatewayInternal { message: String },
}

impl ProxyFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyFailure::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ProxyFailure::ServiceNotFound { .. } => StatusCode::NOT_FOUND,
            ProxyFailure::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            ProxyFailure::GatewayInternal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyFailure {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// A completed upstream round trip. Status and body are relayed verbatim;
/// an upstream's own 4xx/5xx is still a successful proxy.
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

// Raw failure from the upstream exchange, before classification
#[derive(Debug, Error)]
enum UpstreamError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("invalid JSON from upstream: {0}")]
    Body(#[from] serde_json::Error),
}

/// Run one request through the gateway: admission, resolution, the upstream
/// call under a bounded timeout, outcome classification, and telemetry.
pub async fn dispatch(
    state: &GatewayState,
    method: &Method,
    service: &str,
    sub_path: &str,
    query: Option<&str>,
    headers: &HeaderMap,
    body: Bytes,
    client_ip: &str,
) -> Result<UpstreamResponse, ProxyFailure> {
    state.stats.incr_total();
    REQUESTS_TOTAL.inc();

    let start = Instant::now();
    let logical_path = format!("/api/v1/{service}/{sub_path}");

    if !state.rate_limiter.admit(client_ip, Instant::now()) {
        state.stats.incr_rate_limited();
        RATE_LIMITED_TOTAL.inc();
        record(state, method, &logical_path, client_ip, StatusCode::TOO_MANY_REQUESTS, 0.0);
        return Err(ProxyFailure::RateLimited);
    }

    let base_url = match state.registry.resolve(service) {
        Ok(url) => url,
        Err(not_found) => {
            // Does not count toward successful/failed proxies
            record(state, method, &logical_path, client_ip, StatusCode::NOT_FOUND, 0.0);
            return Err(ProxyFailure::ServiceNotFound {
                service: not_found.service,
                available: not_found.available,
            });
        }
    };

    let result = forward(state, method, base_url, sub_path, query, headers, body, client_ip)
        .await
        .map_err(|e| classify(service, e));

    let duration_ms = elapsed_ms(start);
    match &result {
        Ok(upstream) => {
            state.stats.incr_successful();
            PROXIED_TOTAL.inc();
            debug!(%method, path = %logical_path, status = upstream.status.as_u16(), "proxied");
            record(state, method, &logical_path, client_ip, upstream.status, duration_ms);
        }
        Err(failure) => {
            state.stats.incr_failed();
            FAILED_TOTAL.inc();
            warn!(%method, path = %logical_path, error = %failure, "upstream call failed");
            record(state, method, &logical_path, client_ip, failure.status(), duration_ms);
        }
    }
    REQUEST_LATENCY.observe(start.elapsed().as_secs_f64());

    result
}

// Build and perform the outbound call. No shared-store lock is held here.
async fn forward(
    state: &GatewayState,
    method: &Method,
    base_url: &str,
    sub_path: &str,
    query: Option<&str>,
    headers: &HeaderMap,
    body: Bytes,
    client_ip: &str,
) -> Result<UpstreamResponse, UpstreamError> {
    let mut target = format!("{}/{}", base_url.trim_end_matches('/'), sub_path);
    if let Some(query) = query {
        target.push('?');
        target.push_str(query);
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json");

    let response = state
        .client
        .request(method.clone(), &target)
        .timeout(UPSTREAM_TIMEOUT)
        .header(header::CONTENT_TYPE, content_type)
        .header("x-forwarded-for", client_ip)
        .header("x-gateway-request-id", state.next_request_id())
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let bytes = response.bytes().await?;
    // Upstreams speak JSON; anything else (empty bodies included) is a
    // gateway-level failure, not a relayable response
    serde_json::from_slice::<serde_json::Value>(&bytes)?;

    Ok(UpstreamResponse {
        status,
        body: bytes,
    })
}

// Single classification step: connection-level failures are 502, everything
// else (timeout, malformed body, ...) is 500
fn classify(service: &str, err: UpstreamError) -> ProxyFailure {
    match err {
        UpstreamError::Transport(e) if e.is_connect() => ProxyFailure::UpstreamUnavailable {
            service: service.to_string(),
        },
        UpstreamError::Transport(e) => ProxyFailure::GatewayInternal {
            message: e.to_string(),
        },
        UpstreamError::Body(e) => ProxyFailure::GatewayInternal {
            message: e.to_string(),
        },
    }
}

fn record(
    state: &GatewayState,
    method: &Method,
    path: &str,
    client_ip: &str,
    status: StatusCode,
    duration_ms: f64,
) {
    state.request_log.append(RequestRecord {
        method: method.to_string(),
        path: path.to_string(),
        client_ip: client_ip.to_string(),
        status_code: status.as_u16(),
        duration_ms,
        timestamp: Utc::now(),
    });
}

fn elapsed_ms(start: Instant) -> f64 {
    let ms = start.elapsed().as_secs_f64() * 1000.0;
    (ms * 100.0).round() / 100.0
}
