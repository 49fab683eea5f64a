//! Metric aggregation data model.
//!
//! Defines `MetricAggregation`, one row of the metrics section of an
//! Elasticsearch query. Rows are kept in evaluation order: a pipeline
//! aggregation may only reference rows that come before it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// A single metric aggregation configured on a query.
///
/// The `type` is kept as the raw identifier so that queries saved by a newer
/// version, or hand-edited ones, still deserialize. Use
/// [`AggregationRegistry::get`](crate::registry::AggregationRegistry::get) to
/// resolve it.
///
/// # Example
///
/// ```
/// use shared::models::MetricAggregation;
///
/// let metric = MetricAggregation::new("1", "avg").with_field("duration_ms");
///
/// assert_eq!(metric.metric_type, "avg");
/// assert!(metric.validate_metric().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MetricAggregation {
    /// Identifier, unique within the query.
    #[validate(length(min = 1, message = "Metric id cannot be empty"))]
    pub id: String,

    /// The aggregation type identifier (e.g. "avg", "derivative").
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Metric type cannot be empty"))]
    pub metric_type: String,

    /// Source field for basic aggregations, or the id of the referenced
    /// metric for pipeline aggregations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Whether the metric is hidden from the query results.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide: bool,
}

/// Errors that can occur when validating a metric aggregation.
#[derive(Debug, Error)]
pub enum MetricAggregationError {
    /// The metric id is empty.
    #[error("Metric id cannot be empty")]
    EmptyId,

    /// The metric type is empty.
    #[error("Metric type cannot be empty")]
    EmptyType,

    /// Two metrics in the same query share an id.
    #[error("Duplicate metric id: '{0}'")]
    DuplicateId(String),

    /// Validation failed with details.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl MetricAggregation {
    /// Creates a new metric aggregation without a field.
    #[must_use]
    pub fn new(id: impl Into<String>, metric_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metric_type: metric_type.into(),
            field: None,
            hide: false,
        }
    }

    /// Sets the field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Marks the metric as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }

    /// Validates the metric aggregation.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or the type is empty.
    pub fn validate_metric(&self) -> Result<(), MetricAggregationError> {
        if self.id.is_empty() {
            return Err(MetricAggregationError::EmptyId);
        }
        if self.metric_type.is_empty() {
            return Err(MetricAggregationError::EmptyType);
        }
        self.validate()?;
        Ok(())
    }
}

/// Validates every metric of a query and checks that ids are unique.
///
/// # Errors
///
/// Returns the first validation error found, in query order.
pub fn validate_metrics(metrics: &[MetricAggregation]) -> Result<(), MetricAggregationError> {
    for (index, metric) in metrics.iter().enumerate() {
        metric.validate_metric()?;
        if metrics[..index].iter().any(|m| m.id == metric.id) {
            return Err(MetricAggregationError::DuplicateId(metric.id.clone()));
        }
    }
    Ok(())
}
