/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! Oanda throttles each access token to 120 requests per second. Calls are
//! held back here before they reach the network so a burst of MCP tool calls
//! degrades into queueing instead of 429 responses.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Rate limiter for controlling API request rates
///
/// Uses the `governor` crate to implement a token bucket algorithm.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// The replenish interval is `period_seconds / max_requests`, so the
    /// sustained rate matches `max_requests` per period while up to
    /// `burst_size` calls may go through at once. Zero values fall back to one.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        let period = Duration::from_secs(config.period_seconds.max(1));
        let replenish = (period / max_requests.get()).max(Duration::from_nanos(1));

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(max_requests))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    /// Checks if a request can be made immediately, consuming a permit when it can
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
