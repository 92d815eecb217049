use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Process-wide operational counters plus the fixed start time used to
/// derive uptime. Counters only ever increment; everything resets on restart.
pub struct StatsCounter {
    total_requests: AtomicU64,
    successful_proxies: AtomicU64,
    failed_proxies: AtomicU64,
    rate_limited: AtomicU64,
    started_at: Instant,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub total_requests: u64,
    pub successful_proxies: u64,
    pub failed_proxies: u64,
    pub rate_limited: u64,
    pub uptime_seconds: f64,
}

impl StatsCounter {
    pub fn new() -> Self {
        Self {
            total_requests: AtomicU64::new(0),
            successful_proxies: AtomicU64::new(0),
            failed_proxies: AtomicU64::new(0),
            rate_limited: AtomicU64::new(0),
            started_at: Instant::now(),
        }
    }

    pub fn incr_total(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn incr_successful(&self) {
        self.successful_proxies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn incr_failed(&self) {
        self.failed_proxies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn incr_rate_limited(&self) {
        self.rate_limited.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let uptime = self.started_at.elapsed().as_secs_f64();
        StatsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_proxies: self.successful_proxies.load(Ordering::Relaxed),
            failed_proxies: self.failed_proxies.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
            uptime_seconds: (uptime * 100.0).round() / 100.0,
        }
    }
}

impl Default for StatsCounter {
    fn default() -> Self {
        Self::new()
    }
}
