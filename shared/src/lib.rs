//! esmetrics Shared Library
//!
//! This crate contains the types and logic behind the Elasticsearch metric
//! aggregation editor used by the esmetrics API server and CLI.
//!
//! # Modules
//!
//! - [`models`] - Metric aggregation entries as stored in a query
//! - [`registry`] - The static, ordered table of aggregation types
//! - [`version`] - Version parsing and version-range expressions
//! - [`eligibility`] - Which aggregation types may be picked next
//! - [`editor`] - View model and change actions for a single metric row
//! - [`sidemenu`] - The sidebar bottom section
//!
//! # Example
//!
//! ```
//! use shared::eligibility::eligible_types;
//! use shared::models::MetricAggregation;
//! use shared::registry::AggregationRegistry;
//!
//! let registry = AggregationRegistry::builtin();
//! let prior = vec![MetricAggregation::new("1", "avg")];
//!
//! let options = eligible_types(&registry, &prior, "7.10.0");
//! assert!(options.iter().any(|o| o.value == "derivative"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod eligibility;
pub mod models;
pub mod registry;
pub mod sidemenu;
pub mod version;

/// Re-export common dependencies for convenience.
pub use semver;
pub use serde;
pub use serde_json;
pub use validator;
