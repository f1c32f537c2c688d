use crate::server::docs::ApiDoc;
use crate::server::handlers;
use crate::server::state::AppState;
use crate::utils::id::request_id;
use axum::Json;
use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use serde_json::json;
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router
///
/// # Routes
///
/// - `GET    /` - liveness
/// - `GET    /health` - Oanda connectivity
/// - `GET    /account` - account summary
/// - `GET    /positions` - open positions
/// - `GET    /orders` - pending orders
/// - `GET    /price/:instrument` - current bid/ask
/// - `GET    /historical/:instrument` - candles
/// - `POST   /order/market` - market order
/// - `POST   /order/limit` - limit order
/// - `DELETE /order/:order_id` - cancel order
/// - `POST   /position/close/:instrument` - close position
/// - `GET    /docs`, `/openapi.json` - API documentation
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/account", get(handlers::get_account_info))
        .route("/positions", get(handlers::get_positions))
        .route("/orders", get(handlers::get_orders))
        .route("/price/:instrument", get(handlers::get_current_price))
        .route("/historical/:instrument", get(handlers::get_historical_data))
        .route("/order/market", post(handlers::place_market_order))
        .route("/order/limit", post(handlers::place_limit_order))
        .route("/order/:order_id", delete(handlers::cancel_order))
        .route("/position/close/:instrument", post(handlers::close_position));

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "request",
                        id = %request_id(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }))
                // Any origin, mirrored back so credentialed requests work
                .layer(CorsLayer::very_permissive()),
        )
        .with_state(state)
}

/// Turns a panic inside a handler into a JSON 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Global exception: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": "Internal server error",
            "detail": detail,
        })),
    )
        .into_response()
}
