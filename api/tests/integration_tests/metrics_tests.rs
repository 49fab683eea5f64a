//! Integration tests for the metric aggregation editor endpoints.
//!
//! Tests cover:
//! - Type options for first and later metrics
//! - Elasticsearch version gating and the configured default version
//! - Malformed versions and unknown metric types
//! - Editor views for basic, pipeline and script metrics
//! - Error handling for invalid bodies

use api::AppState;
use axum::http::StatusCode;
use serde_json::json;
use shared::registry::AggregationRegistry;

use super::common::{post_json, test_app, test_app_with_state, values};

#[tokio::test]
async fn test_pipeline_types_follow_a_basic_metric() {
    let (app, _state) = test_app();

    let metrics = json!([
        {"id": "1", "type": "avg", "field": "duration"},
        {"id": "2", "type": "count"},
        {"id": "3", "type": "derivative", "field": "1"}
    ]);

    // First metric: nothing precedes it
    let (status, response) = post_json(
        app.clone(),
        "/api/v1/metrics/type-options",
        json!({"metrics": metrics, "editing_id": "1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let first = values(&response, "options");
    assert!(first.contains(&"avg"));
    assert!(!first.contains(&"derivative"));
    assert!(!first.contains(&"bucket_script"));

    // Third metric: "avg" precedes it
    let (status, response) = post_json(
        app,
        "/api/v1/metrics/type-options",
        json!({"metrics": metrics, "editing_id": "3"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let third = values(&response, "options");
    assert!(third.contains(&"derivative"));
    assert!(third.contains(&"bucket_script"));

    // Pipeline types keep their place between the basic types
    let position = |id: &str| third.iter().position(|v| *v == id).unwrap();
    assert!(position("cardinality") < position("moving_avg"));
    assert!(position("bucket_script") < position("raw_document"));
}

#[tokio::test]
async fn test_pipeline_only_prefix_offers_basic_types() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/v1/metrics/type-options",
        json!({
            "metrics": [
                {"id": "1", "type": "cumulative_sum"},
                {"id": "2", "type": "count"}
            ],
            "editing_id": "2"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!values(&response, "options").contains(&"derivative"));
}

#[tokio::test]
async fn test_version_gating() {
    let (app, _state) = test_app();
    let metrics = json!([{"id": "1", "type": "max"}, {"id": "2", "type": "count"}]);

    let (_, es7) = post_json(
        app.clone(),
        "/api/v1/metrics/type-options",
        json!({"metrics": metrics, "editing_id": "2", "es_version": "7.6.0"}),
    )
    .await;
    let es7 = values(&es7, "options");
    assert!(es7.contains(&"moving_avg"));
    assert!(!es7.contains(&"top_metrics"));
    assert!(!es7.contains(&"rate"));

    let (_, es8) = post_json(
        app,
        "/api/v1/metrics/type-options",
        json!({"metrics": metrics, "editing_id": "2", "es_version": "8.2.0"}),
    )
    .await;
    let es8 = values(&es8, "options");
    assert!(!es8.contains(&"moving_avg"));
    assert!(es8.contains(&"top_metrics"));
    assert!(es8.contains(&"rate"));
}

#[tokio::test]
async fn test_configured_default_version() {
    let app = test_app_with_state(AppState::new(
        AggregationRegistry::builtin(),
        "6.8.0",
        Vec::new(),
    ));

    let (status, response) = post_json(
        app,
        "/api/v1/metrics/type-options",
        json!({"metrics": [{"id": "1", "type": "avg"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["es_version"], "6.8.0");
    assert!(!values(&response, "options").contains(&"moving_fn"));
}

#[tokio::test]
async fn test_malformed_version_offers_unrestricted_types_only() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/v1/metrics/type-options",
        json!({"metrics": [{"id": "1", "type": "avg"}], "es_version": "latest"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        values(&response, "options"),
        vec![
            "count",
            "avg",
            "sum",
            "max",
            "min",
            "extended_stats",
            "percentiles",
            "cardinality",
            "raw_document",
            "raw_data",
            "logs",
        ]
    );
}

#[tokio::test]
async fn test_unknown_previous_type_is_ignored() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/v1/metrics/type-options",
        json!({
            "metrics": [{"id": "1", "type": "from_the_future"}, {"id": "2", "type": "count"}],
            "editing_id": "2"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let options = values(&response, "options");
    assert!(options.contains(&"count"));
    assert!(!options.contains(&"derivative"));
}

#[tokio::test]
async fn test_type_options_are_stable() {
    let (app, _state) = test_app();
    let body = json!({"metrics": [{"id": "1", "type": "sum"}], "es_version": "7.10.0"});

    let (_, first) = post_json(app.clone(), "/api/v1/metrics/type-options", body.clone()).await;
    let (_, second) = post_json(app, "/api/v1/metrics/type-options", body).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_editor_views_for_a_query() {
    let (app, _state) = test_app();
    let metrics = json!([
        {"id": "1", "type": "sum", "field": "bytes"},
        {"id": "2", "type": "moving_fn", "field": "1"},
        {"id": "3", "type": "bucket_script", "hide": true},
        {"id": "4", "type": "cardinality", "field": "user"}
    ]);
    let fields = json!(["bytes", "user"]);

    // Basic metric with inline script support: field picker with "None"
    let (status, view) = post_json(
        app.clone(),
        "/api/v1/metrics/editor",
        json!({"metrics": metrics, "id": "1", "fields": fields}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["field_control"]["kind"], "field_picker");
    assert_eq!(view["field_control"]["placeholder"], "Select Field");
    assert_eq!(view["field_control"]["value"], "bytes");
    assert_eq!(
        view["field_control"]["options"],
        json!([{"label": "None"}, {"label": "bytes", "value": "bytes"}, {"label": "user", "value": "user"}])
    );

    // Pipeline metric: picker over previous metrics
    let (status, view) = post_json(
        app.clone(),
        "/api/v1/metrics/editor",
        json!({"metrics": metrics, "id": "2"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["field_control"]["kind"], "metric_picker");
    assert_eq!(
        view["field_control"]["options"],
        json!([{"value": "1", "label": "Sum bytes"}])
    );

    // Multiple bucket paths: no field control, hidden flag carried
    let (status, view) = post_json(
        app.clone(),
        "/api/v1/metrics/editor",
        json!({"metrics": metrics, "id": "3"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["field_control"]["kind"], "hidden");
    assert_eq!(view["hidden"], true);
    assert_eq!(view["has_settings_editor"], true);

    // Field picker without script support: no "None"
    let (status, view) = post_json(
        app,
        "/api/v1/metrics/editor",
        json!({"metrics": metrics, "id": "4", "fields": fields}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["selected"]["label"], "Unique Count");
    assert_eq!(view["field_control"]["options"][0]["label"], "bytes");
}

#[tokio::test]
async fn test_editor_errors() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app.clone(),
        "/api/v1/metrics/editor",
        json!({"metrics": [], "id": "1"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["error"], "metric_not_found");

    let (status, response) = post_json(
        app.clone(),
        "/api/v1/metrics/editor",
        json!({"metrics": [{"id": "1", "type": "from_the_future"}], "id": "1"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["error"], "unknown_type");

    let (status, response) = post_json(
        app.clone(),
        "/api/v1/metrics/editor",
        json!({"metrics": [{"id": "", "type": "avg"}], "id": "1"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "validation_failed");

    let (status, response) =
        post_json(app, "/api/v1/metrics/editor", json!({"id": "1"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "invalid_json");
}
