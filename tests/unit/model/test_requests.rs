use assert_json_diff::assert_json_eq;
use oanda_mcp_server::error::AppError;
use oanda_mcp_server::model::requests::{
    CandlesQuery, ClosePositionQuery, ClosePositionRequest, LimitOrderRequest, MarketOrderRequest,
    scalar_to_string,
};
use oanda_mcp_server::presentation::order::OrderType;
use serde_json::{Value, json};

fn json_value<T: serde::Serialize>(v: &T) -> Value {
    serde_json::to_value(v).unwrap()
}

fn market(body: Value) -> MarketOrderRequest {
    serde_json::from_value(body).unwrap()
}

fn limit(body: Value) -> LimitOrderRequest {
    serde_json::from_value(body).unwrap()
}

fn invalid_input(err: AppError) -> String {
    match err {
        AppError::InvalidInput(msg) => msg,
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn market_order_minimal() {
    let order = market(json!({"instrument": "EUR_USD", "units": 100}))
        .into_order()
        .unwrap();

    assert_eq!(order.order.order_type, OrderType::Market);
    assert_json_eq!(
        json_value(&order),
        json!({"order": {"type": "MARKET", "instrument": "EUR_USD", "units": "100"}})
    );
}

#[test]
fn market_order_with_attachments() {
    let order = market(json!({
        "instrument": "EUR_USD",
        "units": "-2500",
        "stop_loss": 1.095,
        "take_profit": "1.0700"
    }))
    .into_order()
    .unwrap();

    assert_json_eq!(
        json_value(&order),
        json!({"order": {
            "type": "MARKET",
            "instrument": "EUR_USD",
            "units": "-2500",
            "stopLossOnFill": {"price": "1.095"},
            "takeProfitOnFill": {"price": "1.0700"}
        }})
    );
}

#[test]
fn market_order_skips_falsy_attachments() {
    let order = market(json!({
        "instrument": "GBP_USD",
        "units": 10,
        "stop_loss": 0,
        "take_profit": ""
    }))
    .into_order()
    .unwrap();

    assert!(order.order.stop_loss_on_fill.is_none());
    assert!(order.order.take_profit_on_fill.is_none());

    let order = market(json!({"instrument": "GBP_USD", "units": 10, "stop_loss": null}))
        .into_order()
        .unwrap();
    assert!(order.order.stop_loss_on_fill.is_none());
}

#[test]
fn market_order_required_fields_in_order() {
    let err = market(json!({})).into_order().unwrap_err();
    assert_eq!(invalid_input(err), "Missing required field: instrument");

    let err = market(json!({"instrument": "EUR_USD"}))
        .into_order()
        .unwrap_err();
    assert_eq!(invalid_input(err), "Missing required field: units");

    let err = market(json!({"instrument": "EUR_USD", "units": null}))
        .into_order()
        .unwrap_err();
    assert_eq!(invalid_input(err), "Missing required field: units");
}

#[test]
fn market_order_rejects_structured_units() {
    let err = market(json!({"instrument": "EUR_USD", "units": [1, 2]}))
        .into_order()
        .unwrap_err();
    assert!(invalid_input(err).starts_with("units must be a number or a string"));
}

#[test]
fn limit_order_requires_price() {
    let err = limit(json!({"instrument": "EUR_USD", "units": 100}))
        .into_order()
        .unwrap_err();
    assert_eq!(invalid_input(err), "Missing required field: price");
}

#[test]
fn limit_order_full() {
    let order = limit(json!({
        "instrument": "USD_JPY",
        "units": 1000,
        "price": 149.5,
        "take_profit": 151
    }))
    .into_order()
    .unwrap();

    assert_json_eq!(
        json_value(&order),
        json!({"order": {
            "type": "LIMIT",
            "instrument": "USD_JPY",
            "units": "1000",
            "price": "149.5",
            "takeProfitOnFill": {"price": "151"}
        }})
    );
}

#[test]
fn scalar_rendering() {
    assert_eq!(scalar_to_string(&json!(100)).as_deref(), Some("100"));
    assert_eq!(scalar_to_string(&json!(-5)).as_deref(), Some("-5"));
    assert_eq!(scalar_to_string(&json!(1.25)).as_deref(), Some("1.25"));
    assert_eq!(scalar_to_string(&json!("0.5")).as_deref(), Some("0.5"));
    assert_eq!(scalar_to_string(&json!(true)), None);
    assert_eq!(scalar_to_string(&json!({"a": 1})), None);
}

#[test]
fn close_position_all() {
    let req = ClosePositionRequest::from_units("ALL").unwrap();
    assert_json_eq!(
        json_value(&req),
        json!({"longUnits": "ALL", "shortUnits": "ALL"})
    );
    assert_eq!(ClosePositionQuery::default().units(), "ALL");
}

#[test]
fn close_position_long_and_short() {
    let req = ClosePositionRequest::from_units("250").unwrap();
    assert_json_eq!(json_value(&req), json!({"longUnits": "250"}));

    let req = ClosePositionRequest::from_units("-75").unwrap();
    assert_json_eq!(json_value(&req), json!({"shortUnits": "75"}));
}

#[test]
fn close_position_invalid_units() {
    let err = ClosePositionRequest::from_units("half").unwrap_err();
    assert_eq!(invalid_input(err), "invalid units: half");

    // Only the exact keyword closes everything
    assert!(ClosePositionRequest::from_units("all").is_err());
}

#[test]
fn candles_query_deserializes_from_query_string_shape() {
    let query: CandlesQuery =
        serde_json::from_value(json!({"granularity": "M15", "count": 20})).unwrap();
    assert_eq!(query.granularity(), "M15");
    assert_eq!(query.count(), 20);

    let query: CandlesQuery = serde_json::from_value(json!({"granularity": ""})).unwrap();
    assert_eq!(query.granularity(), "D");
}
