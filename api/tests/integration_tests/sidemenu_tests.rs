//! Integration tests for the sidebar endpoints.

use api::AppState;
use axum::http::StatusCode;
use serde_json::json;
use shared::registry::AggregationRegistry;
use shared::sidemenu::NavLink;

use super::common::{post_json, test_app, test_app_with_state};

#[tokio::test]
async fn test_default_bottom_section_has_no_links() {
    let (app, state) = test_app();
    assert!(state.bottom_nav().is_empty());

    let (status, response) = post_json(
        app.clone(),
        "/api/v1/sidemenu/bottom",
        json!({"is_signed_in": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["show_sign_in"], true);
    assert_eq!(response["links"], json!([]));

    let (status, response) = post_json(
        app,
        "/api/v1/sidemenu/bottom",
        json!({"is_signed_in": true, "user": {"login": "admin", "org_count": 4}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["show_sign_in"], false);
    assert_eq!(response["links"], json!([]));
}

#[tokio::test]
async fn test_org_switcher_for_multi_org_user() {
    let app = test_app_with_state(AppState::new(
        AggregationRegistry::builtin(),
        "7.10.0",
        vec![
            NavLink::new("profile", "admin", "/profile"),
            NavLink::new("help", "Help", "/help"),
        ],
    ));

    let (status, response) = post_json(
        app.clone(),
        "/api/v1/sidemenu/bottom",
        json!({"is_signed_in": true, "user": {"login": "admin", "org_count": 2}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["links"][0]["show_org_switcher"], true);
    assert_eq!(response["links"][1]["show_org_switcher"], false);

    let (_, response) = post_json(
        app,
        "/api/v1/sidemenu/bottom",
        json!({"is_signed_in": true, "user": {"login": "solo", "org_count": 1}}),
    )
    .await;
    assert_eq!(response["links"][0]["show_org_switcher"], false);
}

#[tokio::test]
async fn test_invalid_session_body() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/v1/sidemenu/bottom",
        json!({"is_signed_in": "yes"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "invalid_json");
}
