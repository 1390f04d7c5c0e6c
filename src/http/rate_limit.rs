//! Rate limiting implementation
//!
//! Uses the governor crate to enforce a minimum spacing between outbound
//! requests. The quota is one cell per interval with a burst of one, so the
//! first request goes out immediately and every later one waits until the
//! interval has elapsed since the previous permit.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for rate limiting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimiterConfig {
    /// Minimum time between two requests
    pub min_interval: Duration,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_secs(1),
        }
    }
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    /// Create a config from a (possibly fractional) number of seconds.
    ///
    /// Returns `None` when the interval is zero, negative or not finite,
    /// meaning no limiting should be applied.
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return None;
        }
        Some(Self::new(Duration::from_secs_f64(secs)))
    }
}

/// Minimum-spacing rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
    min_interval: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    pub fn new(config: &RateLimiterConfig) -> Self {
        let quota = Quota::with_period(config.min_interval)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MAX))
            .allow_burst(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(Governor::direct(quota)),
            min_interval: config.min_interval,
        }
    }

    /// Wait until a request can be made
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("min_interval", &self.min_interval)
            .finish_non_exhaustive()
    }
}
