use crate::error::AppError;
use crate::model::requests::ClosePositionRequest;
use crate::model::responses::AccountDetails;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets balance, equity and margin details of the configured account
    async fn get_account(&self) -> Result<AccountDetails, AppError>;

    /// Gets all open positions
    async fn get_open_positions(&self) -> Result<Vec<Value>, AppError>;

    /// Closes all or part of the position in an instrument
    ///
    /// # Arguments
    /// * `instrument` - Instrument name, e.g. `EUR_USD`
    /// * `request` - Which side and how many units to close
    ///
    /// # Returns
    /// * The raw Oanda transaction response
    async fn close_position(
        &self,
        instrument: &str,
        request: &ClosePositionRequest,
    ) -> Result<Value, AppError>;
}
