use chrono::Local;
use serde::{Deserialize, Serialize};

/// Payload of `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Greeting
    pub message: String,
    /// Oanda environment in use
    pub environment: String,
    /// Always `healthy` when the process answers
    pub status: String,
    /// Local time of the answer, ISO-8601 without offset
    pub timestamp: String,
}

impl ServiceStatus {
    /// Status stamped with the current local time
    pub fn running(environment: &str) -> Self {
        Self {
            message: "Oanda MCP Server is running!".to_string(),
            environment: environment.to_string(),
            status: "healthy".to_string(),
            timestamp: Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        }
    }
}

/// Payload of `GET /health`
///
/// Serialized untagged, so each variant yields exactly its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HealthStatus {
    /// Oanda answered the account probe
    Healthy {
        /// `healthy`
        status: String,
        /// `ok`
        oanda_connection: String,
        /// Configured account
        account_id: String,
        /// Oanda environment in use
        environment: String,
    },
    /// The account probe failed
    Unhealthy {
        /// `unhealthy`
        status: String,
        /// Why the probe failed
        error: String,
        /// `failed`
        oanda_connection: String,
    },
}

impl HealthStatus {
    /// Successful probe
    pub fn healthy(account_id: &str, environment: &str) -> Self {
        HealthStatus::Healthy {
            status: "healthy".to_string(),
            oanda_connection: "ok".to_string(),
            account_id: account_id.to_string(),
            environment: environment.to_string(),
        }
    }

    /// Failed probe
    pub fn unhealthy(error: impl ToString) -> Self {
        HealthStatus::Unhealthy {
            status: "unhealthy".to_string(),
            error: error.to_string(),
            oanda_connection: "failed".to_string(),
        }
    }

    /// Whether the probe succeeded
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy { .. })
    }
}
