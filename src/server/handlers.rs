/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! HTTP handlers
//!
//! Each handler forwards to one Oanda call through the [`AppState`] service,
//! reshapes the answer and wraps it in an [`ApiResponse`]. Failures are logged
//! with the handler name and rendered by [`AppError`]'s `IntoResponse`.

use crate::error::AppError;
use crate::model::requests::{
    CandlesQuery, ClosePositionQuery, ClosePositionRequest, LimitOrderRequest, MarketOrderRequest,
};
use crate::model::responses::ApiResponse;
use crate::presentation::account::AccountSummary;
use crate::presentation::health::{HealthStatus, ServiceStatus};
use crate::presentation::price::{HistoricalData, PriceQuote};
use crate::server::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::{error, info, warn};

type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Logs a failed operation the same way for every handler
///
/// Bad client input is a warning; anything coming from Oanda or from this
/// process is an error.
fn log_failure(operation: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |e| {
        let message = failure_message(operation, &e);
        match e {
            AppError::InvalidInput(_) | AppError::NotFound(_) => warn!("{}", message),
            _ => error!("{}", message),
        }
        e
    }
}

fn failure_message(operation: &str, e: &AppError) -> String {
    match e {
        e if e.is_upstream() => format!("Oanda API error in {operation}: {e}"),
        AppError::InvalidInput(_) | AppError::NotFound(_) => {
            format!("Rejected request in {operation}: {e}")
        }
        e => format!("Unexpected error in {operation}: {e}"),
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Server is running"))
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(ServiceStatus::running(state.environment.as_str()))
}

/// Detailed health check, probing the Oanda account
///
/// Always answers 200; the body says whether Oanda was reachable.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Connectivity to Oanda"))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    match state.service.get_account().await {
        Ok(_) => Json(HealthStatus::healthy(
            &state.account_id,
            state.environment.as_str(),
        )),
        Err(e) => {
            warn!("Health check failed: {}", e);
            Json(HealthStatus::unhealthy(e))
        }
    }
}

/// Account information including balance, equity and margin details
#[utoipa::path(
    get,
    path = "/account",
    tag = "Account",
    responses(
        (status = 200, description = "Account summary"),
        (status = 400, description = "Oanda API error"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn get_account_info(State(state): State<AppState>) -> ApiResult<AccountSummary> {
    let account = state
        .service
        .get_account()
        .await
        .map_err(log_failure("get_account_info"))?;
    Ok(Json(ApiResponse::ok(AccountSummary::from(account))))
}

/// All open positions
#[utoipa::path(
    get,
    path = "/positions",
    tag = "Account",
    responses(
        (status = 200, description = "Open positions and their count"),
        (status = 400, description = "Oanda API error")
    )
)]
pub async fn get_positions(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let positions = state
        .service
        .get_open_positions()
        .await
        .map_err(log_failure("get_positions"))?;
    Ok(Json(ApiResponse::list(positions)))
}

/// All pending orders
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "Pending orders and their count"),
        (status = 400, description = "Oanda API error")
    )
)]
pub async fn get_orders(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let orders = state
        .service
        .get_pending_orders()
        .await
        .map_err(log_failure("get_orders"))?;
    Ok(Json(ApiResponse::list(orders)))
}

/// Current bid/ask prices for an instrument
#[utoipa::path(
    get,
    path = "/price/{instrument}",
    tag = "Prices",
    params(("instrument" = String, Path, description = "Instrument name, e.g. EUR_USD")),
    responses(
        (status = 200, description = "Bid, ask and spread"),
        (status = 404, description = "No price data for the instrument"),
        (status = 400, description = "Oanda API error")
    )
)]
pub async fn get_current_price(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
) -> ApiResult<PriceQuote> {
    let prices = state
        .service
        .get_prices(&instrument)
        .await
        .map_err(log_failure("get_current_price"))?;

    let price = prices
        .first()
        .ok_or_else(|| AppError::NotFound(format!("No price data found for {instrument}")))
        .map_err(log_failure("get_current_price"))?;

    let quote =
        PriceQuote::from_client_price(&instrument, price).map_err(log_failure("get_current_price"))?;
    Ok(Json(ApiResponse::ok(quote)))
}

/// Historical candle data for an instrument
#[utoipa::path(
    get,
    path = "/historical/{instrument}",
    tag = "Prices",
    params(
        ("instrument" = String, Path, description = "Instrument name, e.g. EUR_USD"),
        CandlesQuery
    ),
    responses(
        (status = 200, description = "Candles"),
        (status = 400, description = "Oanda API error or invalid query")
    )
)]
pub async fn get_historical_data(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
    query: Result<Query<CandlesQuery>, QueryRejection>,
) -> ApiResult<HistoricalData> {
    let Query(query) = query
        .map_err(|e| AppError::InvalidInput(e.body_text()))
        .map_err(log_failure("get_historical_data"))?;
    let granularity = query.granularity();

    let response = state
        .service
        .get_candles(&instrument, granularity, query.count())
        .await
        .map_err(log_failure("get_historical_data"))?;

    Ok(Json(ApiResponse::ok(HistoricalData::new(
        &instrument,
        granularity,
        response.candles,
    ))))
}

/// Places a market order
#[utoipa::path(
    post,
    path = "/order/market",
    tag = "Orders",
    request_body = MarketOrderRequest,
    responses(
        (status = 200, description = "Oanda order transaction"),
        (status = 400, description = "Missing field or Oanda API error")
    )
)]
pub async fn place_market_order(
    State(state): State<AppState>,
    payload: Result<Json<MarketOrderRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(request) = payload
        .map_err(|e| AppError::InvalidInput(e.body_text()))
        .map_err(log_failure("place_market_order"))?;
    let order = request
        .into_order()
        .map_err(log_failure("place_market_order"))?;

    let response = state
        .service
        .create_order(&order)
        .await
        .map_err(log_failure("place_market_order"))?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Places a limit order
#[utoipa::path(
    post,
    path = "/order/limit",
    tag = "Orders",
    request_body = LimitOrderRequest,
    responses(
        (status = 200, description = "Oanda order transaction"),
        (status = 400, description = "Missing field or Oanda API error")
    )
)]
pub async fn place_limit_order(
    State(state): State<AppState>,
    payload: Result<Json<LimitOrderRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(request) = payload
        .map_err(|e| AppError::InvalidInput(e.body_text()))
        .map_err(log_failure("place_limit_order"))?;
    let order = request
        .into_order()
        .map_err(log_failure("place_limit_order"))?;

    let response = state
        .service
        .create_order(&order)
        .await
        .map_err(log_failure("place_limit_order"))?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Cancels a pending order
#[utoipa::path(
    delete,
    path = "/order/{order_id}",
    tag = "Orders",
    params(("order_id" = String, Path, description = "Order id or @clientID")),
    responses(
        (status = 200, description = "Oanda cancel transaction"),
        (status = 400, description = "Oanda API error")
    )
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Value> {
    let response = state
        .service
        .cancel_order(&order_id)
        .await
        .map_err(log_failure("cancel_order"))?;
    Ok(Json(ApiResponse::ok(response)))
}

/// Closes all or part of a position
#[utoipa::path(
    post,
    path = "/position/close/{instrument}",
    tag = "Account",
    params(
        ("instrument" = String, Path, description = "Instrument name, e.g. EUR_USD"),
        ClosePositionQuery
    ),
    responses(
        (status = 200, description = "Oanda close transaction"),
        (status = 400, description = "Invalid units or Oanda API error")
    )
)]
pub async fn close_position(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
    query: Result<Query<ClosePositionQuery>, QueryRejection>,
) -> ApiResult<Value> {
    let Query(query) = query
        .map_err(|e| AppError::InvalidInput(e.body_text()))
        .map_err(log_failure("close_position"))?;
    let request =
        ClosePositionRequest::from_units(query.units()).map_err(log_failure("close_position"))?;

    let response = state
        .service
        .close_position(&instrument, &request)
        .await
        .map_err(log_failure("close_position"))?;
    info!("Position close requested for {}", instrument);
    Ok(Json(ApiResponse::ok(response)))
}

/// Answer for routes that do not exist
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response()
}
