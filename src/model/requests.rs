/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{CLOSE_ALL_UNITS, DEFAULT_CANDLE_COUNT, DEFAULT_GRANULARITY, MAX_CANDLE_COUNT};
use crate::error::AppError;
use crate::presentation::order::OrderType;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /order/market`
///
/// Numeric fields may be sent either as JSON numbers or as strings; they are
/// forwarded to Oanda as strings.
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, ToSchema)]
pub struct MarketOrderRequest {
    /// Instrument name, e.g. `EUR_USD`
    pub instrument: Option<String>,
    /// Units to trade, positive to buy and negative to sell
    #[schema(value_type = Option<String>, example = "100")]
    pub units: Option<Value>,
    /// Stop loss price attached on fill
    #[schema(value_type = Option<String>)]
    pub stop_loss: Option<Value>,
    /// Take profit price attached on fill
    #[schema(value_type = Option<String>)]
    pub take_profit: Option<Value>,
}

/// Body of `POST /order/limit`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, ToSchema)]
pub struct LimitOrderRequest {
    /// Instrument name, e.g. `EUR_USD`
    pub instrument: Option<String>,
    /// Units to trade, positive to buy and negative to sell
    #[schema(value_type = Option<String>, example = "100")]
    pub units: Option<Value>,
    /// Limit price
    #[schema(value_type = Option<String>, example = "1.0850")]
    pub price: Option<Value>,
    /// Stop loss price attached on fill
    #[schema(value_type = Option<String>)]
    pub stop_loss: Option<Value>,
    /// Take profit price attached on fill
    #[schema(value_type = Option<String>)]
    pub take_profit: Option<Value>,
}

impl MarketOrderRequest {
    /// Converts the MCP body into an Oanda market order
    ///
    /// # Errors
    /// `InvalidInput` when `instrument` or `units` is missing or malformed
    pub fn into_order(self) -> Result<OrderRequest, AppError> {
        let instrument = require_instrument(self.instrument)?;
        let units = require_scalar("units", self.units)?;

        Ok(OrderRequest {
            order: OrderSpec {
                order_type: OrderType::Market,
                instrument,
                units,
                price: None,
                stop_loss_on_fill: price_details("stop_loss", self.stop_loss)?,
                take_profit_on_fill: price_details("take_profit", self.take_profit)?,
            },
        })
    }
}

impl LimitOrderRequest {
    /// Converts the MCP body into an Oanda limit order
    ///
    /// # Errors
    /// `InvalidInput` when `instrument`, `units` or `price` is missing or malformed
    pub fn into_order(self) -> Result<OrderRequest, AppError> {
        let instrument = require_instrument(self.instrument)?;
        let units = require_scalar("units", self.units)?;
        let price = require_scalar("price", self.price)?;

        Ok(OrderRequest {
            order: OrderSpec {
                order_type: OrderType::Limit,
                instrument,
                units,
                price: Some(price),
                stop_loss_on_fill: price_details("stop_loss", self.stop_loss)?,
                take_profit_on_fill: price_details("take_profit", self.take_profit)?,
            },
        })
    }
}

fn require_instrument(instrument: Option<String>) -> Result<String, AppError> {
    match instrument {
        Some(i) if !i.trim().is_empty() => Ok(i),
        Some(_) => Err(AppError::InvalidInput(
            "instrument must not be empty".to_string(),
        )),
        None => Err(missing_field("instrument")),
    }
}

fn require_scalar(field: &str, value: Option<Value>) -> Result<String, AppError> {
    match value {
        None | Some(Value::Null) => Err(missing_field(field)),
        Some(v) => scalar_to_string(&v).ok_or_else(|| {
            AppError::InvalidInput(format!("{field} must be a number or a string, got {v}"))
        }),
    }
}

fn missing_field(field: &str) -> AppError {
    AppError::InvalidInput(format!("Missing required field: {field}"))
}

/// Builds a `{price}` attachment when the optional value is set and truthy
fn price_details(field: &str, value: Option<Value>) -> Result<Option<PriceDetails>, AppError> {
    match value {
        Some(v) if is_truthy(&v) => scalar_to_string(&v)
            .map(|price| Some(PriceDetails { price }))
            .ok_or_else(|| {
                AppError::InvalidInput(format!("{field} must be a number or a string, got {v}"))
            }),
        _ => Ok(None),
    }
}

/// Renders a JSON number or string the way Oanda expects decimal values
///
/// Strings are forwarded untouched; integers keep no fractional part.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Whether an optional order attachment counts as "set"
///
/// `null`, `false`, zero, the empty string and empty containers do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Query string of `POST /position/close/{instrument}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClosePositionQuery {
    /// `ALL` (default) or a signed unit count; positive closes long units, negative short units
    pub units: Option<String>,
}

impl ClosePositionQuery {
    /// Requested units, defaulting to `ALL`
    #[must_use]
    pub fn units(&self) -> &str {
        self.units.as_deref().unwrap_or(CLOSE_ALL_UNITS)
    }
}

/// Query string of `GET /historical/{instrument}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CandlesQuery {
    /// Candle granularity such as `M1`, `H1` or `D` (default `D`)
    pub granularity: Option<String>,
    /// Number of candles (default 100, at most 5000)
    pub count: Option<u32>,
}

impl CandlesQuery {
    /// Requested granularity or the daily default
    #[must_use]
    pub fn granularity(&self) -> &str {
        self.granularity
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or(DEFAULT_GRANULARITY)
    }

    /// Requested count, capped at the Oanda maximum
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
            .unwrap_or(DEFAULT_CANDLE_COUNT)
            .min(MAX_CANDLE_COUNT)
    }
}

/// Price attached to an order on fill, e.g. `stopLossOnFill`
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct PriceDetails {
    /// Trigger price as a decimal string
    pub price: String,
}

/// Order specification sent to `POST /v3/accounts/{id}/orders`
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct OrderSpec {
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Instrument name
    pub instrument: String,
    /// Signed units as a decimal string
    pub units: String,
    /// Limit price, only for limit orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Stop loss created when the order fills
    #[serde(rename = "stopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<PriceDetails>,
    /// Take profit created when the order fills
    #[serde(rename = "takeProfitOnFill", skip_serializing_if = "Option::is_none")]
    pub take_profit_on_fill: Option<PriceDetails>,
}

/// Envelope Oanda expects around an order specification
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct OrderRequest {
    /// The order to create
    pub order: OrderSpec,
}

/// Body of `PUT /v3/accounts/{id}/positions/{instrument}/close`
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ClosePositionRequest {
    /// Long units to close, or `ALL`
    #[serde(rename = "longUnits", skip_serializing_if = "Option::is_none")]
    pub long_units: Option<String>,
    /// Short units to close, or `ALL`
    #[serde(rename = "shortUnits", skip_serializing_if = "Option::is_none")]
    pub short_units: Option<String>,
}

impl ClosePositionRequest {
    /// Closes both sides of the position entirely
    #[must_use]
    pub fn all() -> Self {
        Self {
            long_units: Some(CLOSE_ALL_UNITS.to_string()),
            short_units: Some(CLOSE_ALL_UNITS.to_string()),
        }
    }

    /// Translates the MCP `units` parameter into a close request
    ///
    /// `ALL` closes both sides. A positive integer closes that many long
    /// units; zero or a negative integer closes its absolute value of short units.
    ///
    /// # Errors
    /// `InvalidInput` when `units` is neither `ALL` nor an integer
    pub fn from_units(units: &str) -> Result<Self, AppError> {
        let units = units.trim();
        if units == CLOSE_ALL_UNITS {
            return Ok(Self::all());
        }

        let parsed: i64 = units
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("invalid units: {units}")))?;

        if parsed > 0 {
            Ok(Self {
                long_units: Some(parsed.to_string()),
                short_units: None,
            })
        } else {
            Ok(Self {
                long_units: None,
                short_units: Some(parsed.unsigned_abs().to_string()),
            })
        }
    }
}
