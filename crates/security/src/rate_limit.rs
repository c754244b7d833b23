//! Sliding-window rate limiter.
//!
//! Tracks request timestamps per client key (IP, token, CLI user).
//! Thread-safe via `std::sync::Mutex` (non-async, held briefly), so a
//! check-and-record from two concurrent requests of the same client never
//! loses an update.
//!
//! Constructed once at startup and shared via `Arc`; tests build a fresh
//! instance per case.

use outfitter_config::RateLimitConfig;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::warn;

/// Above this many tracked clients, idle buckets are evicted.
const MAX_TRACKED_CLIENTS: usize = 10_000;

pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    clients: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, Duration::from_secs(config.window_secs))
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Check if the client is within rate limits. Returns `true` if allowed.
    pub fn check(&self, client_key: &str) -> bool {
        self.check_at(client_key, Instant::now())
    }

    /// `check` against an explicit clock reading.
    pub fn check_at(&self, client_key: &str, now: Instant) -> bool {
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());

        if clients.len() > MAX_TRACKED_CLIENTS {
            clients.retain(|_, timestamps| {
                timestamps
                    .last()
                    .is_some_and(|t| now.saturating_duration_since(*t) < self.window)
            });
        }

        let timestamps = clients.entry(client_key.to_string()).or_default();

        // Remove expired timestamps
        timestamps.retain(|t| now.saturating_duration_since(*t) < self.window);

        if timestamps.len() >= self.max_requests {
            warn!(
                client = %client_key.chars().take(20).collect::<String>(),
                limit = self.max_requests,
                "Rate limit exceeded"
            );
            return false;
        }

        timestamps.push(now);
        true
    }

    /// Requests the client may still make in the window ending at `now`.
    pub fn remaining_at(&self, client_key: &str, now: Instant) -> usize {
        let clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());
        let used = clients.get(client_key).map_or(0, |timestamps| {
            timestamps
                .iter()
                .filter(|t| now.saturating_duration_since(**t) < self.window)
                .count()
        });
        self.max_requests.saturating_sub(used)
    }

    /// Number of client buckets currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.clients.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
