/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::{AccountService, MarketService, OrderService};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ClosePositionRequest, OrderRequest};
use crate::model::responses::{
    AccountDetails, AccountDetailsResponse, CandlesResponse, ClientPrice, OrdersResponse,
    PositionsResponse, PricingResponse,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Oanda v20 client implementing every service the server exposes
///
/// All account scoped calls use the account id from the configuration.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the given configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client sharing an existing transport
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    fn account_path(&self, suffix: &str) -> String {
        format!("v3/accounts/{}{}", self.http_client.account_id(), suffix)
    }
}

/// Rejects identifiers that would escape their URL path segment
///
/// Oanda instruments are `[A-Z0-9_]` and order specifiers are numeric ids or
/// `@clientID`; anything outside letters, digits, `_`, `-`, `.` and `@` is refused.
pub fn validate_path_segment(kind: &str, value: &str) -> Result<(), AppError> {
    let valid = !value.is_empty()
        && value != "."
        && value != ".."
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '@'));
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!("invalid {kind}: {value}")))
    }
}

#[async_trait]
impl AccountService for Client {
    async fn get_account(&self) -> Result<AccountDetails, AppError> {
        info!("Getting account details");
        let path = self.account_path("");
        let response: AccountDetailsResponse = self.http_client.get(&path).await?;
        debug!("Account details obtained for: {}", response.account.id);
        Ok(response.account)
    }

    async fn get_open_positions(&self) -> Result<Vec<Value>, AppError> {
        info!("Getting open positions");
        let path = self.account_path("/openPositions");
        let response: PositionsResponse = self.http_client.get(&path).await?;
        debug!("Positions obtained: {} positions", response.positions.len());
        Ok(response.positions)
    }

    async fn close_position(
        &self,
        instrument: &str,
        request: &ClosePositionRequest,
    ) -> Result<Value, AppError> {
        validate_path_segment("instrument", instrument)?;
        info!("Closing position in {}: {}", instrument, request);
        let path = self.account_path(&format!("/positions/{instrument}/close"));
        self.http_client.put(&path, Some(request)).await
    }
}

#[async_trait]
impl OrderService for Client {
    async fn get_pending_orders(&self) -> Result<Vec<Value>, AppError> {
        info!("Getting pending orders");
        let path = self.account_path("/orders");
        let response: OrdersResponse = self.http_client.get(&path).await?;
        debug!("Orders obtained: {} orders", response.orders.len());
        Ok(response.orders)
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<Value, AppError> {
        info!("Creating order: {}", order);
        let path = self.account_path("/orders");
        self.http_client.post(&path, order).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value, AppError> {
        validate_path_segment("order id", order_id)?;
        info!("Cancelling order: {}", order_id);
        let path = self.account_path(&format!("/orders/{order_id}/cancel"));
        self.http_client.put(&path, None::<()>).await
    }
}

#[async_trait]
impl MarketService for Client {
    async fn get_prices(&self, instrument: &str) -> Result<Vec<ClientPrice>, AppError> {
        validate_path_segment("instrument", instrument)?;
        debug!("Getting prices for: {}", instrument);
        let path = self.account_path("/pricing");
        let response: PricingResponse = self
            .http_client
            .get_with_query(&path, &[("instruments", instrument.to_string())])
            .await?;
        Ok(response.prices)
    }

    async fn get_candles(
        &self,
        instrument: &str,
        granularity: &str,
        count: u32,
    ) -> Result<CandlesResponse, AppError> {
        validate_path_segment("instrument", instrument)?;
        info!(
            "Getting {} {} candles for: {}",
            count, granularity, instrument
        );
        let path = format!("v3/instruments/{instrument}/candles");
        let response: CandlesResponse = self
            .http_client
            .get_with_query(
                &path,
                &[
                    ("granularity", granularity.to_string()),
                    ("count", count.to_string()),
                ],
            )
            .await?;
        debug!("Candles obtained: {}", response.candles.len());
        Ok(response)
    }
}
