/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::AccountDetails;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Account balance, equity and margin figures
///
/// Decimal values keep Oanda's string representation so no precision is lost
/// on the way through.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Account id
    pub id: String,
    /// Home currency
    pub currency: String,
    /// Current balance
    pub balance: String,
    /// Net asset value (equity)
    pub nav: String,
    /// Unrealized profit/loss
    pub unrealized_pl: String,
    /// Margin in use
    pub margin_used: String,
    /// Margin available
    pub margin_available: String,
    /// Margin rate
    pub margin_rate: String,
    /// Number of open trades
    pub open_trade_count: i64,
    /// Number of open positions
    pub open_position_count: i64,
    /// Number of pending orders
    pub pending_order_count: i64,
}

impl From<AccountDetails> for AccountSummary {
    fn from(account: AccountDetails) -> Self {
        Self {
            id: account.id,
            currency: account.currency,
            balance: account.balance,
            nav: account.nav,
            unrealized_pl: account.unrealized_pl,
            margin_used: account.margin_used,
            margin_available: account.margin_available,
            margin_rate: account.margin_rate,
            open_trade_count: account.open_trade_count,
            open_position_count: account.open_position_count,
            pending_order_count: account.pending_order_count,
        }
    }
}
