use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUESTS_TOTAL: Counter =
        register_counter!("gateway_requests_total", "Total number of requests").unwrap();
    pub static ref PROXIED_TOTAL: Counter = register_counter!(
        "gateway_successful_proxies_total",
        "Total proxy calls that got an upstream response"
    )
    .unwrap();
    pub static ref FAILED_TOTAL: Counter = register_counter!(
        "gateway_failed_proxies_total",
        "Total proxy calls that failed to reach or read the upstream"
    )
    .unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "gateway_rate_limited_total",
        "Total requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "gateway_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
}
