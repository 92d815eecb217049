use axum::body::Bytes;
use axum::extract::{ConnectInfo, Path, RawQuery, State};
use axum::http::{HeaderMap, Method, header};
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::proxy;
use crate::state::GatewayState;

pub async fn proxy_handler(
    State(state): State<Arc<GatewayState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path((service, path)): Path<(String, String)>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let client_ip = addr.ip().to_string();

    let outcome = proxy::dispatch(
        &state,
        &method,
        &service,
        &path,
        query.as_deref(),
        &headers,
        body,
        &client_ip,
    )
    .await;

    match outcome {
        Ok(upstream) => (
            upstream.status,
            [(header::CONTENT_TYPE, "application/json")],
            upstream.body,
        )
            .into_response(),
        Err(failure) => failure.into_response(),
    }
}
