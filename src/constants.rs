/// User agent string sent to the Oanda REST API
pub const USER_AGENT: &str = concat!("oanda-mcp-server/", env!("CARGO_PKG_VERSION"));
/// REST host for the Oanda practice (demo) environment
pub const PRACTICE_REST_URL: &str = "https://api-fxpractice.oanda.com";
/// REST host for the Oanda live (fxTrade) environment
pub const LIVE_REST_URL: &str = "https://api-fxtrade.oanda.com";
/// Oanda environment used when `OANDA_ENVIRONMENT` is not set
pub const DEFAULT_ENVIRONMENT: &str = "practice";
/// Default timeout in seconds for calls to Oanda
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// Default host the HTTP server binds to
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port the HTTP server listens on
pub const DEFAULT_PORT: u16 = 8000;
/// Candle granularity used when the client does not ask for one (daily)
pub const DEFAULT_GRANULARITY: &str = "D";
/// Number of candles returned when the client does not ask for a count
pub const DEFAULT_CANDLE_COUNT: u32 = 100;
/// Largest candle count Oanda accepts in a single request
pub const MAX_CANDLE_COUNT: u32 = 5000;
/// Keyword meaning "the whole position" when closing positions
pub const CLOSE_ALL_UNITS: &str = "ALL";
/// Placeholder returned when a price side is missing from a quote
pub const PRICE_NOT_AVAILABLE: &str = "N/A";
/// Requests allowed per period by the client side rate limiter.
///
/// Oanda allows 120 requests per second on a persistent connection, this keeps some headroom.
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
/// Rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 1;
/// Rate limiter burst size
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 100;
/// Retries performed when Oanda answers 429
pub const DEFAULT_MAX_RETRY_COUNT: u32 = 3;
/// Seconds to wait before retrying a rate limited request
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;
