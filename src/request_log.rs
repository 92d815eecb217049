use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Mutex;

// Upper bound on retained records
pub const MAX_LOG_SIZE: usize = 1000;

// One completed gateway request, kept for diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub method: String,
    pub path: String,
    pub client_ip: String,
    pub status_code: u16,
    pub duration_ms: f64,
    pub timestamp: DateTime<Utc>,
}

/// Bounded FIFO of recent requests. The oldest record is evicted once the
/// capacity is reached; only the count is exposed over HTTP.
pub struct RequestLog {
    entries: Mutex<VecDeque<RequestRecord>>,
    capacity: usize,
}

impl RequestLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn append(&self, record: RequestRecord) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
