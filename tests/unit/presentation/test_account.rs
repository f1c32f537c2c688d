use assert_json_diff::assert_json_eq;
use oanda_mcp_server::model::responses::AccountDetails;
use oanda_mcp_server::presentation::account::AccountSummary;
use serde_json::json;

fn details() -> AccountDetails {
    AccountDetails {
        id: "101-004-1234567-001".to_string(),
        currency: "EUR".to_string(),
        balance: "5000.0000".to_string(),
        nav: "5010.0000".to_string(),
        unrealized_pl: "10.0000".to_string(),
        margin_used: "120.0000".to_string(),
        margin_available: "4890.0000".to_string(),
        margin_rate: "0.05".to_string(),
        open_trade_count: 2,
        open_position_count: 1,
        pending_order_count: 0,
    }
}

#[test]
fn summary_from_details() {
    let summary = AccountSummary::from(details());
    assert_eq!(summary.id, "101-004-1234567-001");
    assert_eq!(summary.nav, "5010.0000");
    assert_eq!(summary.open_trade_count, 2);
}

#[test]
fn summary_uses_snake_case_keys() {
    let summary = AccountSummary::from(details());
    assert_json_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "id": "101-004-1234567-001",
            "currency": "EUR",
            "balance": "5000.0000",
            "nav": "5010.0000",
            "unrealized_pl": "10.0000",
            "margin_used": "120.0000",
            "margin_available": "4890.0000",
            "margin_rate": "0.05",
            "open_trade_count": 2,
            "open_position_count": 1,
            "pending_order_count": 0
        })
    );
}
