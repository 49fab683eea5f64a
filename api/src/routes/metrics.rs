//! Metric aggregation editor endpoints.
//!
//! Serves the aggregation type registry, the type options for a metric row
//! and the full editor view of a metric row.

use super::{json_body, validation_failed, ApiError, ApiRejection};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shared::editor::{previous_metrics, EditorError, MetricEditorView};
use shared::eligibility::{eligible_types, TypeOption};
use shared::models::{validate_metrics, MetricAggregation};
use shared::registry::AggregationTypeDescriptor;
use validator::Validate;

/// Response listing every aggregation type.
#[derive(Debug, Serialize)]
pub struct TypeListResponse {
    /// The aggregation types in presentation order.
    pub types: &'static [AggregationTypeDescriptor],
}

/// Request body for type options.
#[derive(Debug, Deserialize, Validate)]
pub struct TypeOptionsRequest {
    /// The metrics of the query, in order.
    #[serde(default)]
    pub metrics: Vec<MetricAggregation>,

    /// The metric being edited. Without it, every metric counts as previous.
    #[validate(length(min = 1, message = "editing_id cannot be empty"))]
    pub editing_id: Option<String>,

    /// Elasticsearch version (optional, defaults to the configured one).
    pub es_version: Option<String>,
}

/// Response for type options.
#[derive(Debug, Serialize)]
pub struct TypeOptionsResponse {
    /// The Elasticsearch version the options were computed for.
    pub es_version: String,
    /// The types that may be picked, in presentation order.
    pub options: Vec<TypeOption>,
}

/// Request body for the metric editor view.
#[derive(Debug, Deserialize, Validate)]
pub struct MetricEditorRequest {
    /// The metrics of the query, in order.
    pub metrics: Vec<MetricAggregation>,

    /// The metric being edited.
    #[validate(length(min = 1, message = "id cannot be empty"))]
    pub id: String,

    /// Elasticsearch version (optional, defaults to the configured one).
    pub es_version: Option<String>,

    /// Document fields discovered on the data source (optional).
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Creates the metric editor routes.
///
/// # Routes
///
/// - `GET /api/v1/metrics/types` - List every aggregation type
/// - `POST /api/v1/metrics/type-options` - Types that may be picked for a metric
/// - `POST /api/v1/metrics/editor` - Editor view of a metric
pub fn metrics_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/metrics/types", get(list_types))
        .route("/api/v1/metrics/type-options", post(type_options))
        .route("/api/v1/metrics/editor", post(metric_editor))
        .with_state(state)
}

/// Handler for GET /api/v1/metrics/types.
async fn list_types(State(state): State<AppState>) -> Json<TypeListResponse> {
    Json(TypeListResponse {
        types: state.registry().descriptors(),
    })
}

/// Handler for POST /api/v1/metrics/type-options.
async fn type_options(
    State(state): State<AppState>,
    payload: Result<Json<TypeOptionsRequest>, JsonRejection>,
) -> Result<Json<TypeOptionsResponse>, ApiRejection> {
    let request = json_body(payload)?;

    request
        .validate()
        .map_err(|e| validation_failed(e.to_string()))?;
    validate_metrics(&request.metrics).map_err(|e| validation_failed(e.to_string()))?;

    let es_version = request
        .es_version
        .unwrap_or_else(|| state.es_version().to_string());

    let previous = match request.editing_id.as_deref() {
        Some(id) => previous_metrics(&request.metrics, id),
        None => request.metrics.as_slice(),
    };

    let options = eligible_types(state.registry(), previous, &es_version);

    tracing::debug!(
        es_version = %es_version,
        previous = previous.len(),
        options = options.len(),
        "Computed aggregation type options"
    );

    Ok(Json(TypeOptionsResponse {
        es_version,
        options,
    }))
}

/// Handler for POST /api/v1/metrics/editor.
async fn metric_editor(
    State(state): State<AppState>,
    payload: Result<Json<MetricEditorRequest>, JsonRejection>,
) -> Result<Json<MetricEditorView>, ApiRejection> {
    let request = json_body(payload)?;

    request
        .validate()
        .map_err(|e| validation_failed(e.to_string()))?;
    validate_metrics(&request.metrics).map_err(|e| validation_failed(e.to_string()))?;

    let es_version = request.es_version.as_deref().unwrap_or(state.es_version());

    let view = MetricEditorView::build(
        state.registry(),
        &request.metrics,
        &request.id,
        es_version,
        &request.fields,
    )
    .map_err(|e| {
        tracing::debug!(id = %request.id, error = %e, "Failed to build metric editor");
        let (status, error) = match &e {
            EditorError::MetricNotFound(_) => (StatusCode::NOT_FOUND, "metric_not_found"),
            EditorError::UnknownType { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "unknown_type"),
            EditorError::IneligibleType { .. }
            | EditorError::NoFieldControl(_)
            | EditorError::InvalidField { .. } => (StatusCode::BAD_REQUEST, "editor_error"),
        };
        (status, Json(ApiError::new(error, e.to_string())))
    })?;

    Ok(Json(view))
}
