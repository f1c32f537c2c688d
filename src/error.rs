/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error handling for the Oanda client and the HTTP server
//!
//! A single [`AppError`] flows from the transport layer up to the axum
//! handlers, where [`IntoResponse`] turns it into a `{"detail": ...}` body.

use axum::Json;
use axum::http::StatusCode as HttpStatus;
use axum::response::{IntoResponse, Response};
use reqwest::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O failure, usually while binding the listener
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Transport level failure talking to Oanda
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// A required configuration value is absent
    #[error("missing configuration: {0}")]
    MissingConfig(String),
    /// A configuration value could not be understood
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Oanda rejected the request
    #[error("{message}")]
    Oanda {
        /// Upstream HTTP status
        status: StatusCode,
        /// Oanda `errorCode`, when present
        code: Option<String>,
        /// Oanda `errorMessage`, or the raw body when it is not JSON
        message: String,
    },
    /// Oanda rejected the access token
    #[error("unauthorized")]
    Unauthorized,
    /// Oanda kept answering 429 after all retries
    #[error("rate limit exceeded")]
    RateLimitExceeded,
    /// The requested resource does not exist
    #[error("{0}")]
    NotFound(String),
    /// The client sent something we cannot forward
    #[error("{0}")]
    InvalidInput(String),
    /// Oanda answered with a payload we could not interpret
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl AppError {
    /// Whether the error originated at Oanda rather than in this process
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::Oanda { .. } | AppError::Unauthorized | AppError::RateLimitExceeded
        )
    }

    /// HTTP status returned to the MCP client for this error
    #[must_use]
    pub fn status_code(&self) -> HttpStatus {
        match self {
            e if e.is_upstream() => HttpStatus::BAD_REQUEST,
            AppError::InvalidInput(_) => HttpStatus::BAD_REQUEST,
            AppError::NotFound(_) => HttpStatus::NOT_FOUND,
            _ => HttpStatus::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `detail` field of the error body
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            e if e.is_upstream() => format!("Oanda API error: {e}"),
            AppError::InvalidInput(msg) | AppError::NotFound(msg) => msg.clone(),
            e => format!("Internal error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
