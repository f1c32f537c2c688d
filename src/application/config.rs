/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_ENVIRONMENT, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_REST_TIMEOUT_SECS,
    LIVE_REST_URL, PRACTICE_REST_URL,
};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none, load_dotenv};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::error;

/// Oanda trading environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// fxTrade Practice, the demo environment
    #[default]
    Practice,
    /// fxTrade, real money
    Live,
}

impl Environment {
    /// REST host serving this environment
    #[must_use]
    pub fn rest_url(&self) -> &'static str {
        match self {
            Environment::Practice => PRACTICE_REST_URL,
            Environment::Live => LIVE_REST_URL,
        }
    }

    /// Name of the environment as accepted in `OANDA_ENVIRONMENT`
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Practice => "practice",
            Environment::Live => "live",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "practice" => Ok(Environment::Practice),
            "live" => Ok(Environment::Live),
            other => Err(AppError::InvalidConfig(format!(
                "unknown Oanda environment '{other}', expected 'practice' or 'live'"
            ))),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Oanda v20 API
pub struct Credentials {
    /// Personal access token, sent as a bearer token
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Account every request operates on
    pub account_id: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the server and its Oanda client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Selected Oanda environment
    pub environment: Environment,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Retry behaviour when Oanda answers 429
    pub retry: RetryConfig,
    /// HTTP listener configuration
    pub server: ServerConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Oanda REST API, without the `/v3` prefix
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Address the HTTP server listens on
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - When both `OANDA_API_KEY` and `OANDA_ACCOUNT_ID` are present
    ///   and `OANDA_ENVIRONMENT` names a known environment
    /// * `Err(AppError)` - Otherwise; the server refuses to start without credentials
    pub fn new() -> Result<Self, AppError> {
        load_dotenv();

        let api_key: Option<String> = get_env_or_none("OANDA_API_KEY");
        let account_id: Option<String> = get_env_or_none("OANDA_ACCOUNT_ID");
        let environment = get_env_or_default("OANDA_ENVIRONMENT", DEFAULT_ENVIRONMENT.to_string());

        let config = Self::build(api_key, account_id, &environment)?;

        Ok(Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("OANDA_REST_BASE_URL", config.rest_api.base_url),
                timeout: get_env_or_default("OANDA_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "OANDA_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "OANDA_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "OANDA_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            retry: RetryConfig::from_env(),
            server: ServerConfig {
                host: get_env_or_default("HOST", DEFAULT_HOST.to_string()),
                port: get_env_or_default("PORT", DEFAULT_PORT),
            },
            ..config
        })
    }

    /// Builds a configuration with defaults from explicit credential values
    ///
    /// # Arguments
    ///
    /// * `api_key` - Oanda personal access token
    /// * `account_id` - Oanda account id
    /// * `environment` - `practice` or `live`
    pub fn build(
        api_key: Option<String>,
        account_id: Option<String>,
        environment: &str,
    ) -> Result<Self, AppError> {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        let account_id = account_id.filter(|a| !a.trim().is_empty());

        let (api_key, account_id) = match (api_key, account_id) {
            (Some(key), Some(account)) => (key, account),
            (None, _) => {
                error!("OANDA_API_KEY not found in environment variables or .env file");
                return Err(AppError::MissingConfig("OANDA_API_KEY".to_string()));
            }
            (_, None) => {
                error!("OANDA_ACCOUNT_ID not found in environment variables or .env file");
                return Err(AppError::MissingConfig("OANDA_ACCOUNT_ID".to_string()));
            }
        };

        let environment: Environment = environment.parse()?;

        Ok(Config {
            credentials: Credentials {
                api_key,
                account_id,
            },
            environment,
            rest_api: RestApiConfig {
                base_url: environment.rest_url().to_string(),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
            rate_limiter: RateLimiterConfig::default(),
            retry: RetryConfig::default(),
            server: ServerConfig::default(),
        })
    }

    /// Returns a copy of this configuration pointing at another REST host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}
