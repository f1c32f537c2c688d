use crate::error::AppError;
use crate::model::responses::{CandlesResponse, ClientPrice};
use async_trait::async_trait;

/// Interface for price data
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets current prices for an instrument
    ///
    /// The list is empty when Oanda has no price for the instrument.
    async fn get_prices(&self, instrument: &str) -> Result<Vec<ClientPrice>, AppError>;

    /// Gets historical candles for an instrument
    ///
    /// # Arguments
    /// * `instrument` - Instrument name, e.g. `EUR_USD`
    /// * `granularity` - Candle granularity, e.g. `M5`, `H1`, `D`
    /// * `count` - Number of candles to fetch
    async fn get_candles(
        &self,
        instrument: &str,
        granularity: &str,
        count: u32,
    ) -> Result<CandlesResponse, AppError>;
}
