use axum::http::StatusCode as HttpStatus;
use axum::response::IntoResponse;
use oanda_mcp_server::error::AppError;
use reqwest::StatusCode;

fn oanda(message: &str) -> AppError {
    AppError::Oanda {
        status: StatusCode::BAD_REQUEST,
        code: Some("INVALID_INSTRUMENT".to_string()),
        message: message.to_string(),
    }
}

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded;
    assert_eq!(error.to_string(), "rate limit exceeded");
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_oanda() {
    let error = oanda("Invalid value specified for 'instrument'");
    assert_eq!(error.to_string(), "Invalid value specified for 'instrument'");
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("Invalid JSON".to_string());
    assert_eq!(error.to_string(), "deserialization error: Invalid JSON");
}

#[test]
fn test_app_error_display_missing_config() {
    let error = AppError::MissingConfig("OANDA_API_KEY".to_string());
    assert_eq!(error.to_string(), "missing configuration: OANDA_API_KEY");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_upstream_errors_map_to_bad_request() {
    for error in [oanda("boom"), AppError::Unauthorized, AppError::RateLimitExceeded] {
        assert!(error.is_upstream());
        assert_eq!(error.status_code(), HttpStatus::BAD_REQUEST);
        assert!(error.detail().starts_with("Oanda API error: "));
    }
    assert_eq!(oanda("boom").detail(), "Oanda API error: boom");
}

#[test]
fn test_client_errors_keep_their_message() {
    let error = AppError::InvalidInput("Missing required field: units".to_string());
    assert_eq!(error.status_code(), HttpStatus::BAD_REQUEST);
    assert_eq!(error.detail(), "Missing required field: units");

    let error = AppError::NotFound("No price data found for XAU_EUR".to_string());
    assert_eq!(error.status_code(), HttpStatus::NOT_FOUND);
    assert_eq!(error.detail(), "No price data found for XAU_EUR");
}

#[test]
fn test_local_errors_map_to_internal_error() {
    let error = AppError::Deserialization("invalid price 'abc'".to_string());
    assert!(!error.is_upstream());
    assert_eq!(error.status_code(), HttpStatus::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error.detail(),
        "Internal error: deserialization error: invalid price 'abc'"
    );
}

#[test]
fn test_into_response_status() {
    let response = AppError::NotFound("nothing".to_string()).into_response();
    assert_eq!(response.status(), HttpStatus::NOT_FOUND);

    let response = oanda("rejected").into_response();
    assert_eq!(response.status(), HttpStatus::BAD_REQUEST);
}
