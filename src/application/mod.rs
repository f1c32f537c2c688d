/// Oanda client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits for account, order and market operations
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
