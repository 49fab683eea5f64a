//! Aggregation type eligibility.
//!
//! Decides which aggregation types may be picked for a metric row, given the
//! rows before it and the Elasticsearch version of the data source.
//!
//! Pipeline aggregations work on the output of other aggregations rather than
//! on documents or fields, so they are only offered once at least one basic
//! aggregation precedes the row being edited. Types the configured
//! Elasticsearch version does not support are never offered.

use crate::models::MetricAggregation;
use crate::registry::AggregationRegistry;
use crate::version::parse_version;
use serde::Serialize;

/// A selectable aggregation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeOption {
    /// The type identifier.
    pub value: &'static str,
    /// The display label.
    pub label: &'static str,
}

/// Returns true if any of the metrics is a known, non-pipeline aggregation.
///
/// Metrics whose type is not in the registry do not count.
#[must_use]
pub fn has_basic_aggregation(registry: &AggregationRegistry, metrics: &[MetricAggregation]) -> bool {
    metrics.iter().any(|metric| match registry.get(&metric.metric_type) {
        Some(descriptor) => descriptor.is_basic(),
        None => {
            tracing::debug!(
                id = %metric.id,
                metric_type = %metric.metric_type,
                "Ignoring metric with unknown aggregation type"
            );
            false
        }
    })
}

/// Returns the aggregation types that may be picked next, in registry order.
///
/// `previous` must hold the metrics that precede the row being edited, not
/// the row itself (see [`crate::editor::previous_metrics`]).
///
/// A type is kept if `es_version` satisfies its version range and it is
/// either basic, or a basic aggregation exists among `previous`. If
/// `es_version` is malformed, only types without a version restriction are
/// kept.
///
/// # Examples
///
/// ```
/// use shared::eligibility::eligible_types;
/// use shared::models::MetricAggregation;
/// use shared::registry::AggregationRegistry;
///
/// let registry = AggregationRegistry::builtin();
///
/// let first = eligible_types(&registry, &[], "7.10.0");
/// assert!(first.iter().all(|o| o.value != "derivative"));
///
/// let after_avg = eligible_types(&registry, &[MetricAggregation::new("1", "avg")], "7.10.0");
/// assert!(after_avg.iter().any(|o| o.value == "derivative"));
/// ```
#[must_use]
pub fn eligible_types(
    registry: &AggregationRegistry,
    previous: &[MetricAggregation],
    es_version: &str,
) -> Vec<TypeOption> {
    let include_pipeline_aggs = has_basic_aggregation(registry, previous);

    let version = match parse_version(es_version) {
        Ok(version) => Some(version),
        Err(e) => {
            tracing::debug!(
                es_version = %es_version,
                error = %e,
                "Malformed Elasticsearch version, offering unrestricted types only"
            );
            None
        }
    };

    registry
        .iter()
        .filter(|descriptor| descriptor.supports_version(version.as_ref()))
        .filter(|descriptor| include_pipeline_aggs || descriptor.is_basic())
        .map(|descriptor| TypeOption {
            value: descriptor.id,
            label: descriptor.label,
        })
        .collect()
}
