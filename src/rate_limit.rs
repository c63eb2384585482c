//! In-memory rate limiting for chat requests.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`.
//! Two limits are enforced:
//! - Per-client: 10 requests/min by default, keyed by client address
//! - Global: 60 requests/min by default, across all clients
//!
//! A rejected request is not recorded, so a client hammering the endpoint
//! does not extend its own lockout.
//!
//! Clients are keyed by the TCP peer address. `x-forwarded-for` and
//! `x-real-ip` are honoured only when `trust_proxy_headers` is set, since
//! any caller can send them; enable it only behind a proxy that overwrites
//! those headers.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::lookup_parse;

const DEFAULT_PER_CLIENT_LIMIT: usize = 10;
const DEFAULT_PER_CLIENT_WINDOW_SECS: u64 = 60;

const DEFAULT_GLOBAL_LIMIT: usize = 60;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub per_client_window: Duration,
    pub global_limit: usize,
    pub global_window: Duration,
    /// Key clients by proxy headers instead of the peer address.
    pub trust_proxy_headers: bool,
}

impl RateLimitConfig {
    /// Read `RATE_LIMIT_PER_CLIENT`, `RATE_LIMIT_PER_CLIENT_WINDOW_SECS`,
    /// `RATE_LIMIT_GLOBAL`, `RATE_LIMIT_GLOBAL_WINDOW_SECS` and
    /// `RATE_LIMIT_TRUST_PROXY`. Unset or malformed values use the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            per_client_limit: lookup_parse(&get, "RATE_LIMIT_PER_CLIENT", DEFAULT_PER_CLIENT_LIMIT),
            per_client_window: Duration::from_secs(lookup_parse(
                &get,
                "RATE_LIMIT_PER_CLIENT_WINDOW_SECS",
                DEFAULT_PER_CLIENT_WINDOW_SECS,
            )),
            global_limit: lookup_parse(&get, "RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            global_window: Duration::from_secs(lookup_parse(
                &get,
                "RATE_LIMIT_GLOBAL_WINDOW_SECS",
                DEFAULT_GLOBAL_WINDOW_SECS,
            )),
            trust_proxy_headers: lookup_parse(&get, "RATE_LIMIT_TRUST_PROXY", false),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-client rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerClientExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-client request timestamps.
    client_requests: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    #[must_use]
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Check both per-client and global rate limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns the first limit that would be exceeded; nothing is recorded.
    pub fn check_and_record(&self, client: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, client: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        // Prune and check global first (no borrow conflict).
        prune_window(&mut inner.global_requests, now, cfg.global_window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded {
                limit: cfg.global_limit,
                window_secs: cfg.global_window.as_secs(),
            });
        }

        let client_deque = inner.client_requests.entry(client.to_owned()).or_default();
        prune_window(client_deque, now, cfg.per_client_window);
        if client_deque.len() >= cfg.per_client_limit {
            return Err(RateLimitError::PerClientExceeded {
                limit: cfg.per_client_limit,
                window_secs: cfg.per_client_window.as_secs(),
            });
        }

        client_deque.push_back(now);
        inner.global_requests.push_back(now);

        // Drop idle clients so the map does not grow without bound.
        let window = cfg.per_client_window;
        inner
            .client_requests
            .retain(|_, deque| deque.back().is_some_and(|&last| now.duration_since(last) <= window));

        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
