use oanda_mcp_server::model::responses::{
    AccountDetailsResponse, ApiResponse, CandlesResponse, OrdersResponse, PositionsResponse,
    PricingResponse,
};
use serde_json::json;

#[test]
fn account_details_from_oanda_payload() {
    let payload = json!({
        "account": {
            "id": "101-004-1234567-001",
            "alias": "Primary",
            "currency": "USD",
            "balance": "100000.0000",
            "NAV": "100012.5000",
            "unrealizedPL": "12.5000",
            "marginUsed": "33.3300",
            "marginAvailable": "99979.1700",
            "marginRate": "0.0333",
            "openTradeCount": 1,
            "openPositionCount": 1,
            "pendingOrderCount": 2,
            "hedgingEnabled": false
        },
        "lastTransactionID": "6"
    });

    let response: AccountDetailsResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.account.id, "101-004-1234567-001");
    assert_eq!(response.account.nav, "100012.5000");
    assert_eq!(response.account.unrealized_pl, "12.5000");
    assert_eq!(response.account.pending_order_count, 2);
    assert_eq!(response.last_transaction_id.as_deref(), Some("6"));
}

#[test]
fn account_details_missing_field_fails() {
    let payload = json!({"account": {"id": "x", "currency": "USD"}});
    assert!(serde_json::from_value::<AccountDetailsResponse>(payload).is_err());
}

#[test]
fn lists_default_to_empty() {
    let positions: PositionsResponse = serde_json::from_value(json!({})).unwrap();
    assert!(positions.positions.is_empty());

    let orders: OrdersResponse =
        serde_json::from_value(json!({"orders": [{"id": "7", "type": "LIMIT"}]})).unwrap();
    assert_eq!(orders.orders.len(), 1);
    assert_eq!(orders.orders[0]["id"], "7");

    let candles: CandlesResponse = serde_json::from_value(json!({"instrument": "EUR_USD"})).unwrap();
    assert!(candles.candles.is_empty());
}

#[test]
fn pricing_payload() {
    let payload = json!({
        "prices": [{
            "type": "PRICE",
            "instrument": "EUR_USD",
            "time": "2026-10-16T20:59:58.123456789Z",
            "bids": [{"price": "1.08500", "liquidity": 10000000}],
            "asks": [{"price": "1.08520", "liquidity": 10000000}],
            "tradeable": true
        }]
    });

    let response: PricingResponse = serde_json::from_value(payload).unwrap();
    let price = &response.prices[0];
    assert_eq!(price.instrument.as_deref(), Some("EUR_USD"));
    assert_eq!(price.bids[0].price.as_deref(), Some("1.08500"));
    assert_eq!(price.asks.len(), 1);
}

#[test]
fn api_response_envelopes() {
    let single = serde_json::to_value(ApiResponse::ok(json!({"a": 1}))).unwrap();
    assert_eq!(single, json!({"success": true, "data": {"a": 1}}));

    let list = serde_json::to_value(ApiResponse::list(vec![json!(1), json!(2)])).unwrap();
    assert_eq!(list, json!({"success": true, "data": [1, 2], "count": 2}));
}
