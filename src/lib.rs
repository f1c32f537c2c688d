/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Oanda MCP Server
//!
//! A small HTTP server that exposes Oanda v20 trading operations in a shape
//! convenient for Model Context Protocol tools: account summary, open positions,
//! pending orders, live prices, historical candles, market and limit orders,
//! order cancellation and position close-out.
//!
//! Every endpoint maps to exactly one Oanda REST call. The server keeps no state
//! of its own beyond the shared HTTP client and its rate limiter.
//!
//! ## Usage
//!
//! ```ignore
//! use oanda_mcp_server::prelude::*;
//!
//! let config = Config::new()?;
//! let client = Client::new(config.clone())?;
//! let app = create_router(AppState::new(&config, Arc::new(client)));
//! ```

/// Application layer: configuration, rate limiting, service traits and the Oanda client
pub mod application;
/// Crate-wide constants
pub mod constants;
/// Error type shared by the client and the HTTP server
pub mod error;
/// Wire models and the low-level HTTP transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Payloads returned to MCP clients
pub mod presentation;
/// The axum application
pub mod server;
/// Environment, logging and id helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
