/// Account and position operations
pub mod account;
/// Price and candle operations
pub mod market;
/// Order operations
pub mod order;

pub use account::AccountService;
pub use market::MarketService;
pub use order::OrderService;

/// Everything the HTTP server needs from Oanda
///
/// Implemented automatically for any type providing the three services, so
/// handlers can hold a single `Arc<dyn OandaService>`.
pub trait OandaService: AccountService + OrderService + MarketService {}

impl<T> OandaService for T where T: AccountService + OrderService + MarketService {}
