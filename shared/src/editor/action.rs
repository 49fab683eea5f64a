//! Change actions emitted by the metric editor.
//!
//! Applying an action to a query is left to whoever owns the query state;
//! the editor only produces them.

use serde::{Deserialize, Serialize};

/// A requested change to one metric row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MetricAggregationAction {
    /// Change the aggregation type of the metric.
    ChangeMetricType {
        /// The metric id.
        id: String,
        /// The new aggregation type identifier.
        #[serde(rename = "type")]
        metric_type: String,
    },
    /// Change the field (or referenced metric) of the metric. `None` clears it.
    ChangeMetricField {
        /// The metric id.
        id: String,
        /// The new field.
        field: Option<String>,
    },
}

impl MetricAggregationAction {
    /// Returns the id of the metric the action applies to.
    #[must_use]
    pub fn metric_id(&self) -> &str {
        match self {
            Self::ChangeMetricType { id, .. } | Self::ChangeMetricField { id, .. } => id,
        }
    }
}
