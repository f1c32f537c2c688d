/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope returned to MCP clients
///
/// `count` is only present on list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`; failures use the error body instead
    pub success: bool,
    /// Endpoint specific payload
    pub data: T,
    /// Number of items in `data` for list endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }
}

impl ApiResponse<Vec<Value>> {
    /// Wraps a list and records its length
    pub fn list(data: Vec<Value>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count: Some(count),
        }
    }
}

/// Error body returned by the Oanda v20 API
#[derive(Debug, Clone, Deserialize)]
pub struct OandaErrorResponse {
    /// Human readable description
    #[serde(rename = "errorMessage")]
    pub error_message: String,
    /// Machine readable code, not present on every error
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
}

/// Response of `GET /v3/accounts/{id}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct AccountDetailsResponse {
    /// Full account details
    pub account: AccountDetails,
    /// Id of the last transaction on the account
    #[serde(rename = "lastTransactionID", default)]
    pub last_transaction_id: Option<String>,
}

/// Subset of the Oanda account object used by this server
///
/// Monetary values are decimal strings, exactly as Oanda sends them.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    /// Account id
    pub id: String,
    /// Home currency
    pub currency: String,
    /// Current balance
    pub balance: String,
    /// Net asset value
    #[serde(rename = "NAV")]
    pub nav: String,
    /// Unrealized profit/loss of all open trades
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: String,
    /// Margin currently in use
    #[serde(rename = "marginUsed")]
    pub margin_used: String,
    /// Margin available for new trades
    #[serde(rename = "marginAvailable")]
    pub margin_available: String,
    /// Account margin rate
    #[serde(rename = "marginRate")]
    pub margin_rate: String,
    /// Number of open trades
    #[serde(rename = "openTradeCount")]
    pub open_trade_count: i64,
    /// Number of open positions
    #[serde(rename = "openPositionCount")]
    pub open_position_count: i64,
    /// Number of pending orders
    #[serde(rename = "pendingOrderCount")]
    pub pending_order_count: i64,
}

/// Response of `GET /v3/accounts/{id}/openPositions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionsResponse {
    /// Open positions, passed through untouched
    #[serde(default)]
    pub positions: Vec<Value>,
}

/// Response of `GET /v3/accounts/{id}/orders`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    /// Pending orders, passed through untouched
    #[serde(default)]
    pub orders: Vec<Value>,
}

/// Response of `GET /v3/accounts/{id}/pricing`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingResponse {
    /// One entry per requested instrument
    #[serde(default)]
    pub prices: Vec<ClientPrice>,
}

/// Price of one instrument as seen by the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientPrice {
    /// Instrument name
    #[serde(default)]
    pub instrument: Option<String>,
    /// Time of the price
    #[serde(default)]
    pub time: Option<String>,
    /// Bid side, best price first
    #[serde(default)]
    pub bids: Vec<PriceBucket>,
    /// Ask side, best price first
    #[serde(default)]
    pub asks: Vec<PriceBucket>,
}

/// A price level with the liquidity available at it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBucket {
    /// Price as a decimal string
    #[serde(default)]
    pub price: Option<String>,
    /// Available liquidity
    #[serde(default)]
    pub liquidity: Option<Value>,
}

/// Response of `GET /v3/instruments/{instrument}/candles`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandlesResponse {
    /// Instrument name
    #[serde(default)]
    pub instrument: Option<String>,
    /// Granularity of the candles
    #[serde(default)]
    pub granularity: Option<String>,
    /// Candles, passed through untouched
    #[serde(default)]
    pub candles: Vec<Value>,
}
