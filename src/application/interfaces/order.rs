use crate::error::AppError;
use crate::model::requests::OrderRequest;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Service for creating, listing and cancelling orders with the Oanda v20 API
///
/// Responses are returned as Oanda sent them; the transactions they contain
/// vary with the order outcome (fill, cancel, reject).
pub trait OrderService: Send + Sync {
    /// Gets all pending orders
    async fn get_pending_orders(&self) -> Result<Vec<Value>, AppError>;

    /// Creates a new order
    async fn create_order(&self, order: &OrderRequest) -> Result<Value, AppError>;

    /// Cancels a pending order
    ///
    /// # Arguments
    /// * `order_id` - Oanda order id, or `@` followed by a client id
    async fn cancel_order(&self, order_id: &str) -> Result<Value, AppError>;
}
