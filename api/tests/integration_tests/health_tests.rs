//! Integration tests for health check and general API functionality.
//!
//! Tests cover:
//! - Health check endpoint
//! - Registry listing

use axum::http::StatusCode;

use super::common::{get, test_app};

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = test_app();

    let (status, response) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["service"], "esmetrics-api");
}

#[tokio::test]
async fn test_registry_listing_matches_state() {
    let (app, state) = test_app();

    let (status, response) = get(app, "/api/v1/metrics/types").await;
    assert_eq!(status, StatusCode::OK);

    let types = response["types"].as_array().unwrap();
    assert_eq!(types.len(), state.registry().len());

    let ids: Vec<&str> = types.iter().map(|t| t["id"].as_str().unwrap()).collect();
    let expected: Vec<&str> = state.registry().iter().map(|d| d.id).collect();
    assert_eq!(ids, expected);

    let rate = types.iter().find(|t| t["id"] == "rate").unwrap();
    assert_eq!(rate["version_range"], ">=7.10.0");
    assert_eq!(rate["label"], "Rate");
}
