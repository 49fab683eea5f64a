//! Data models for esmetrics.
//!
//! This module contains the metric aggregation rows that make up the metrics
//! section of an Elasticsearch query.

pub mod aggregation;

pub use aggregation::{validate_metrics, MetricAggregation, MetricAggregationError};
