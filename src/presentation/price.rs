/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::PRICE_NOT_AVAILABLE;
use crate::error::AppError;
use crate::model::responses::{ClientPrice, PriceBucket};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top of book for one instrument
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Instrument as requested by the client
    pub instrument: String,
    /// Best bid, or `N/A`
    pub bid: String,
    /// Best ask, or `N/A`
    pub ask: String,
    /// `ask - bid`, a missing side counting as zero
    pub spread: f64,
    /// Time of the price
    pub time: Option<String>,
}

impl PriceQuote {
    /// Builds a quote from the first Oanda price entry
    ///
    /// # Errors
    /// `Deserialization` when a price is not a decimal number
    pub fn from_client_price(instrument: &str, price: &ClientPrice) -> Result<Self, AppError> {
        let bid = best_price(&price.bids);
        let ask = best_price(&price.asks);
        let spread = parse_price(ask)? - parse_price(bid)?;

        Ok(Self {
            instrument: instrument.to_string(),
            bid: bid.unwrap_or(PRICE_NOT_AVAILABLE).to_string(),
            ask: ask.unwrap_or(PRICE_NOT_AVAILABLE).to_string(),
            spread,
            time: price.time.clone(),
        })
    }
}

fn best_price(buckets: &[PriceBucket]) -> Option<&str> {
    buckets.first().and_then(|b| b.price.as_deref())
}

fn parse_price(price: Option<&str>) -> Result<f64, AppError> {
    match price {
        None => Ok(0.0),
        Some(p) => p
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::Deserialization(format!("invalid price '{p}'"))),
    }
}

/// Candles for one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    /// Instrument as requested by the client
    pub instrument: String,
    /// Granularity as requested by the client
    pub granularity: String,
    /// Candles exactly as Oanda returned them
    pub candles: Vec<Value>,
    /// Number of candles
    pub count: usize,
}

impl HistoricalData {
    /// Wraps candles and records their number
    pub fn new(instrument: &str, granularity: &str, candles: Vec<Value>) -> Self {
        Self {
            instrument: instrument.to_string(),
            granularity: granularity.to_string(),
            count: candles.len(),
            candles,
        }
    }
}
