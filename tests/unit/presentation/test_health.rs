use oanda_mcp_server::error::AppError;
use oanda_mcp_server::presentation::health::{HealthStatus, ServiceStatus};
use serde_json::json;

#[test]
fn service_status_shape() {
    let status = ServiceStatus::running("practice");
    assert_eq!(status.message, "Oanda MCP Server is running!");
    assert_eq!(status.status, "healthy");
    assert_eq!(status.environment, "practice");
    // e.g. 2026-10-18T09:15:02.123456
    assert_eq!(status.timestamp.len(), 26);
    assert_eq!(&status.timestamp[10..11], "T");
}

#[test]
fn healthy_serialization() {
    let status = HealthStatus::healthy("ACC", "live");
    assert!(status.is_healthy());
    assert_eq!(
        serde_json::to_value(&status).unwrap(),
        json!({
            "status": "healthy",
            "oanda_connection": "ok",
            "account_id": "ACC",
            "environment": "live"
        })
    );
}

#[test]
fn unhealthy_serialization() {
    let status = HealthStatus::unhealthy(AppError::Unauthorized);
    assert!(!status.is_healthy());
    assert_eq!(
        serde_json::to_value(&status).unwrap(),
        json!({
            "status": "unhealthy",
            "error": "unauthorized",
            "oanda_connection": "failed"
        })
    );
}
