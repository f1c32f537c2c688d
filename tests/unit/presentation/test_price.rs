use oanda_mcp_server::error::AppError;
use oanda_mcp_server::model::responses::{ClientPrice, PriceBucket};
use oanda_mcp_server::presentation::price::{HistoricalData, PriceQuote};
use serde_json::json;

fn bucket(price: &str) -> PriceBucket {
    PriceBucket {
        price: Some(price.to_string()),
        liquidity: Some(json!(10000000)),
    }
}

#[test]
fn quote_from_both_sides() {
    let price = ClientPrice {
        instrument: Some("EUR_USD".to_string()),
        time: Some("2026-10-16T20:59:58.123456789Z".to_string()),
        bids: vec![bucket("1.08500"), bucket("1.08490")],
        asks: vec![bucket("1.08520"), bucket("1.08530")],
    };

    let quote = PriceQuote::from_client_price("EUR_USD", &price).unwrap();
    assert_eq!(quote.instrument, "EUR_USD");
    assert_eq!(quote.bid, "1.08500");
    assert_eq!(quote.ask, "1.08520");
    assert!((quote.spread - 0.0002).abs() < 1e-9);
    assert_eq!(quote.time.as_deref(), Some("2026-10-16T20:59:58.123456789Z"));
}

#[test]
fn quote_with_missing_side() {
    let price = ClientPrice {
        asks: vec![bucket("1.5")],
        ..Default::default()
    };

    let quote = PriceQuote::from_client_price("GBP_USD", &price).unwrap();
    assert_eq!(quote.bid, "N/A");
    assert_eq!(quote.ask, "1.5");
    assert_eq!(quote.spread, 1.5);
    assert!(quote.time.is_none());
}

#[test]
fn quote_with_unparseable_price() {
    let price = ClientPrice {
        bids: vec![bucket("abc")],
        asks: vec![bucket("1.1")],
        ..Default::default()
    };

    match PriceQuote::from_client_price("EUR_USD", &price) {
        Err(AppError::Deserialization(msg)) => assert!(msg.contains("abc")),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn quote_serialization_shape() {
    let price = ClientPrice {
        bids: vec![bucket("2")],
        asks: vec![bucket("3")],
        ..Default::default()
    };
    let quote = PriceQuote::from_client_price("XAU_USD", &price).unwrap();
    assert_eq!(
        serde_json::to_value(&quote).unwrap(),
        json!({"instrument": "XAU_USD", "bid": "2", "ask": "3", "spread": 1.0, "time": null})
    );
}

#[test]
fn historical_data_counts_candles() {
    let candles = vec![
        json!({"complete": true, "volume": 10, "time": "t1", "mid": {"o": "1", "h": "2", "l": "0.5", "c": "1.5"}}),
        json!({"complete": false, "volume": 3, "time": "t2"}),
    ];
    let data = HistoricalData::new("EUR_USD", "H1", candles.clone());
    assert_eq!(data.count, 2);
    assert_eq!(data.granularity, "H1");
    assert_eq!(data.candles, candles);
}
