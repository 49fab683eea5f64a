//! API route definitions.
//!
//! This module organizes all HTTP routes for the esmetrics API server.

mod health;
mod metrics;
mod sidemenu;

pub use health::health_routes;
pub use metrics::metrics_routes;
pub use sidemenu::sidemenu_routes;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Error response shared by all API routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    /// Error type.
    pub error: String,
    /// Detailed error message.
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

/// The error half of every handler result.
pub(crate) type ApiRejection = (StatusCode, Json<ApiError>);

/// Unwraps a JSON body, turning a rejection into a 400 `invalid_json` error.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiRejection> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("invalid_json", rejection.body_text())),
        )
    })
}

/// Builds a 400 `validation_failed` error.
pub(crate) fn validation_failed(message: impl Into<String>) -> ApiRejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::new("validation_failed", message)),
    )
}
