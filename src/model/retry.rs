/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRY_COUNT, DEFAULT_RETRY_DELAY_SECS};
use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};

/// Configuration for retrying requests that Oanda rejected with 429
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries on rate limit (None = no retries)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries (None = use the default delay)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration with the crate defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a retry configuration that never retries
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retry_count: Some(0),
            retry_delay_secs: Some(0),
        }
    }

    /// Creates a new retry configuration with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Creates a new retry configuration with both max retries and custom delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Reads `MAX_RETRY_COUNT` and `RETRY_DELAY_SECS`, falling back to the defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_retry_count: get_env_or_none("MAX_RETRY_COUNT").or(Some(DEFAULT_MAX_RETRY_COUNT)),
            retry_delay_secs: get_env_or_none("RETRY_DELAY_SECS")
                .or(Some(DEFAULT_RETRY_DELAY_SECS)),
        }
    }

    /// Gets the maximum retry count
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(0)
    }

    /// Gets the retry delay in seconds
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::with_max_retries_and_delay(DEFAULT_MAX_RETRY_COUNT, DEFAULT_RETRY_DELAY_SECS)
    }
}
