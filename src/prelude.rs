/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Oanda MCP Server Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust,no_run
//! use oanda_mcp_server::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let config = Config::new()?;
//! serve(config).await
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration types
pub use crate::application::config::{
    Config, Credentials, Environment, RateLimiterConfig, RestApiConfig, ServerConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Oanda client
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{
    AccountService, MarketService, OandaService, OrderService,
};

/// Low level transport
pub use crate::model::http::{HttpClient, make_http_request};

/// Rate limiting and retry
pub use crate::application::rate_limiter::RateLimiter;
pub use crate::model::retry::RetryConfig;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    CandlesQuery, ClosePositionQuery, ClosePositionRequest, LimitOrderRequest,
    MarketOrderRequest, OrderRequest, OrderSpec, PriceDetails,
};

/// Response models
pub use crate::model::responses::{
    AccountDetails, ApiResponse, CandlesResponse, ClientPrice, PriceBucket,
};

/// Presentation models
pub use crate::presentation::account::AccountSummary;
pub use crate::presentation::health::{HealthStatus, ServiceStatus};
pub use crate::presentation::order::OrderType;
pub use crate::presentation::price::{HistoricalData, PriceQuote};

// ============================================================================
// SERVER
// ============================================================================

/// HTTP server
pub use crate::server::{AppState, create_router, serve};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging and environment utilities
pub use crate::utils::config::{load_dotenv, load_dotenv_from};
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
