/// Account summary returned by `GET /account`
pub mod account;
/// Liveness and connectivity payloads
pub mod health;
/// Order enums shared with the request models
pub mod order;
/// Price quotes and historical candles
pub mod price;
