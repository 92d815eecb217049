use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::config::Args;
use crate::rate_limit::RateLimiter;
use crate::registry::{InvalidRoute, ServiceRegistry};
use crate::request_log::{MAX_LOG_SIZE, RequestLog};
use crate::stats::StatsCounter;

/// Shared gateway state, created once at startup and handed to every handler.
/// All synchronization is internal to the owned stores.
pub struct GatewayState {
    pub client: reqwest::Client,
    pub registry: ServiceRegistry,
    pub rate_limiter: RateLimiter,
    pub request_log: RequestLog,
    pub stats: StatsCounter,
    request_seq: AtomicU64,
}

impl GatewayState {
    pub fn from_args(args: &Args) -> Result<Self, InvalidRoute> {
        Ok(Self {
            client: reqwest::Client::new(),
            registry: ServiceRegistry::from_args(args)?,
            rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
            request_log: RequestLog::new(MAX_LOG_SIZE),
            stats: StatsCounter::new(),
            request_seq: AtomicU64::new(0),
        })
    }

    // Locally-unique id attached to each forwarded request for log correlation
    pub fn next_request_id(&self) -> String {
        format!("gw-{}", self.request_seq.fetch_add(1, Ordering::Relaxed))
    }
}
