use crate::model::requests::{LimitOrderRequest, MarketOrderRequest};
use utoipa::OpenApi;

/// OpenAPI document served at `/openapi.json` and rendered at `/docs`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::handlers::root,
        crate::server::handlers::health_check,
        crate::server::handlers::get_account_info,
        crate::server::handlers::get_positions,
        crate::server::handlers::get_orders,
        crate::server::handlers::get_current_price,
        crate::server::handlers::get_historical_data,
        crate::server::handlers::place_market_order,
        crate::server::handlers::place_limit_order,
        crate::server::handlers::cancel_order,
        crate::server::handlers::close_position
    ),
    components(schemas(MarketOrderRequest, LimitOrderRequest)),
    tags(
        (name = "Health", description = "Liveness and Oanda connectivity"),
        (name = "Account", description = "Account summary and positions"),
        (name = "Orders", description = "Order placement, listing and cancellation"),
        (name = "Prices", description = "Live prices and historical candles")
    ),
    info(
        title = "Oanda MCP Server",
        description = "REST API for Oanda trading operations compatible with MCP",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
