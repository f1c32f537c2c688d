use oanda_mcp_server::application::client::{Client, validate_path_segment};
use oanda_mcp_server::application::config::Config;
use oanda_mcp_server::application::interfaces::{AccountService, MarketService, OrderService};
use oanda_mcp_server::error::AppError;
use oanda_mcp_server::model::requests::ClosePositionRequest;

fn client() -> Client {
    // Nothing listens on port 9; only requests rejected before the network are issued
    let config = Config::build(Some("token".into()), Some("ACC".into()), "practice")
        .unwrap()
        .with_base_url("http://127.0.0.1:9");
    Client::new(config).unwrap()
}

#[test]
fn test_client_exposes_config() {
    let client = client();
    assert_eq!(client.config().credentials.account_id, "ACC");
}

#[test]
fn test_validate_path_segment_accepts_oanda_ids() {
    assert!(validate_path_segment("instrument", "EUR_USD").is_ok());
    assert!(validate_path_segment("instrument", "DE30_EUR").is_ok());
    assert!(validate_path_segment("order id", "1234").is_ok());
    assert!(validate_path_segment("order id", "@client-ref_1").is_ok());
}

#[test]
fn test_cancel_order_rejects_path_traversal() {
    let err = tokio_test::block_on(client().cancel_order("../../accounts")).unwrap_err();
    match err {
        AppError::InvalidInput(msg) => assert!(msg.contains("invalid order id")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_market_calls_reject_bad_instrument() {
    let client = client();
    assert!(matches!(
        client.get_prices("EUR USD").await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        client.get_candles("", "D", 10).await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        client
            .close_position("EUR/USD", &ClosePositionRequest::all())
            .await,
        Err(AppError::InvalidInput(_))
    ));
}
