//! Aggregation type descriptors.

use crate::version::{parse_range, VersionRange, VersionRangeError};
use serde::Serialize;

/// Static metadata describing one aggregation type.
///
/// Descriptors are built in `const` context with [`basic`](Self::basic) or
/// [`pipeline`](Self::pipeline) followed by the capability builders:
///
/// ```
/// use shared::registry::AggregationTypeDescriptor;
///
/// const AVG: AggregationTypeDescriptor = AggregationTypeDescriptor::basic("avg", "Average")
///     .requires_field()
///     .supports_inline_script();
///
/// assert!(!AVG.is_pipeline_agg);
/// assert_eq!(AVG.version_range, "*");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregationTypeDescriptor {
    /// The type identifier, as stored in `MetricAggregation::metric_type`.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// True if the type consumes the output of other aggregations rather than
    /// documents or fields.
    pub is_pipeline_agg: bool,
    /// Elasticsearch versions supporting this type (`*` for any).
    pub version_range: &'static str,
    /// The type reads a field.
    pub requires_field: bool,
    /// The type accepts an inline script instead of a field.
    pub supports_inline_script: bool,
    /// The type accepts a value for documents missing the field.
    pub supports_missing: bool,
    /// The type references several previous metrics through named variables.
    pub supports_multiple_bucket_paths: bool,
    /// The type has a settings editor.
    pub has_settings: bool,
    /// The type has selectable extra statistics.
    pub has_meta: bool,
    /// The type must be the only metric of the query.
    pub is_single_metric: bool,
    /// The type needs the X-Pack licence on the cluster.
    pub xpack: bool,
}

impl AggregationTypeDescriptor {
    const fn new(id: &'static str, label: &'static str, is_pipeline_agg: bool) -> Self {
        Self {
            id,
            label,
            is_pipeline_agg,
            version_range: "*",
            requires_field: false,
            supports_inline_script: false,
            supports_missing: false,
            supports_multiple_bucket_paths: false,
            has_settings: false,
            has_meta: false,
            is_single_metric: false,
            xpack: false,
        }
    }

    /// Creates a descriptor for an aggregation computed from documents or fields.
    #[must_use]
    pub const fn basic(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, false)
    }

    /// Creates a descriptor for an aggregation computed from other aggregations.
    #[must_use]
    pub const fn pipeline(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, true)
    }

    /// Restricts the type to the given Elasticsearch version range.
    #[must_use]
    pub const fn versions(self, version_range: &'static str) -> Self {
        Self {
            version_range,
            ..self
        }
    }

    /// Marks the type as reading a field.
    #[must_use]
    pub const fn requires_field(self) -> Self {
        Self {
            requires_field: true,
            ..self
        }
    }

    /// Marks the type as accepting an inline script.
    #[must_use]
    pub const fn supports_inline_script(self) -> Self {
        Self {
            supports_inline_script: true,
            ..self
        }
    }

    /// Marks the type as accepting a missing-value substitute.
    #[must_use]
    pub const fn supports_missing(self) -> Self {
        Self {
            supports_missing: true,
            ..self
        }
    }

    /// Marks the type as referencing several previous metrics.
    #[must_use]
    pub const fn supports_multiple_bucket_paths(self) -> Self {
        Self {
            supports_multiple_bucket_paths: true,
            ..self
        }
    }

    /// Marks the type as having a settings editor.
    #[must_use]
    pub const fn has_settings(self) -> Self {
        Self {
            has_settings: true,
            ..self
        }
    }

    /// Marks the type as having selectable extra statistics.
    #[must_use]
    pub const fn has_meta(self) -> Self {
        Self {
            has_meta: true,
            ..self
        }
    }

    /// Marks the type as having to be the only metric of the query.
    #[must_use]
    pub const fn single_metric(self) -> Self {
        Self {
            is_single_metric: true,
            ..self
        }
    }

    /// Marks the type as needing X-Pack.
    #[must_use]
    pub const fn xpack(self) -> Self {
        Self { xpack: true, ..self }
    }

    /// Returns true for aggregations computed from documents or fields.
    #[must_use]
    pub const fn is_basic(&self) -> bool {
        !self.is_pipeline_agg
    }

    /// Parses the declared version range.
    ///
    /// # Errors
    ///
    /// Returns an error if the declared range is not a valid expression.
    pub fn supported_versions(&self) -> Result<VersionRange, VersionRangeError> {
        parse_range(self.version_range)
    }

    /// Returns true if this type can be offered for the given target version.
    ///
    /// Types with an unrestricted range pass for every target, including
    /// prereleases and a target that failed to parse (`None`). A descriptor
    /// with an unparseable range never passes.
    #[must_use]
    pub fn supports_version(&self, version: Option<&semver::Version>) -> bool {
        let range = match self.supported_versions() {
            Ok(range) => range,
            Err(e) => {
                tracing::debug!(
                    aggregation = self.id,
                    error = %e,
                    "Skipping aggregation type with invalid version range"
                );
                return false;
            }
        };

        if range.is_unrestricted() {
            return true;
        }
        version.is_some_and(|version| range.matches(version))
    }
}
