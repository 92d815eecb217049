use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Per-client sliding-window-log rate limiter.
///
/// Each client keeps the timestamps of its admitted requests inside the
/// trailing window. Stale timestamps are pruned lazily on the next admission
/// check for that client; per-call cost is bounded by the limit.
pub struct RateLimiter {
    windows: DashMap<String, Vec<Instant>>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            limit,
            window,
        }
    }

    /// Admit or reject a request from `client` at `now`.
    ///
    /// Rejections do not consume a slot. The DashMap entry guard is held for
    /// the whole prune-check-record sequence, so two racing requests from the
    /// same client cannot both take the last slot.
    pub fn admit(&self, client: &str, now: Instant) -> bool {
        let mut window = self.windows.entry(client.to_string()).or_default();
        window.retain(|&t| now.duration_since(t) < self.window);
        if window.len() >= self.limit as usize {
            return false;
        }
        window.push(now);
        true
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
