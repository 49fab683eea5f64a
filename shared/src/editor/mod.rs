//! Metric editor view model.
//!
//! Everything the editor for one metric row decides before rendering: which
//! types can be picked, which field control is shown and with which options,
//! and whether a settings editor is available. Picks made by the user are
//! turned into [`MetricAggregationAction`]s after checking them against the
//! view.
//!
//! # Example
//!
//! ```
//! use shared::editor::{FieldControl, MetricEditorView};
//! use shared::models::MetricAggregation;
//! use shared::registry::AggregationRegistry;
//!
//! let metrics = vec![
//!     MetricAggregation::new("1", "avg").with_field("latency"),
//!     MetricAggregation::new("2", "derivative").with_field("1"),
//! ];
//!
//! let view = MetricEditorView::build(&AggregationRegistry::builtin(), &metrics, "2", "7.10.0", &[])
//!     .unwrap();
//!
//! assert_eq!(view.selected.label, "Derivative");
//! assert!(matches!(view.field_control, FieldControl::MetricPicker { .. }));
//! ```

mod action;

pub use action::MetricAggregationAction;

use crate::eligibility::{eligible_types, TypeOption};
use crate::models::MetricAggregation;
use crate::registry::{AggregationRegistry, AggregationTypeDescriptor};
use serde::Serialize;
use thiserror::Error;

/// Placeholder shown by an empty field picker.
pub const FIELD_PLACEHOLDER: &str = "Select Field";

/// Label of the field option that clears the field.
pub const NONE_OPTION_LABEL: &str = "None";

/// Errors that can occur when building a metric editor or applying a pick.
#[derive(Debug, Error)]
pub enum EditorError {
    /// No metric with the given id exists in the query.
    #[error("Metric not found: '{0}'")]
    MetricNotFound(String),

    /// The edited metric has a type the registry does not know.
    #[error("Metric '{id}' has unknown aggregation type '{metric_type}'")]
    UnknownType {
        /// The metric id.
        id: String,
        /// The unknown type identifier.
        metric_type: String,
    },

    /// The picked type is not among the eligible options.
    #[error("Aggregation type '{metric_type}' cannot be picked for metric '{id}'")]
    IneligibleType {
        /// The metric id.
        id: String,
        /// The picked type identifier.
        metric_type: String,
    },

    /// The metric's type has no field to pick.
    #[error("Metric '{0}' has no field to pick")]
    NoFieldControl(String),

    /// The picked field is not among the offered options.
    #[error("Field {field:?} cannot be picked for metric '{id}'")]
    InvalidField {
        /// The metric id.
        id: String,
        /// The picked field.
        field: Option<String>,
    },
}

/// A selectable field. A `None` value clears the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    /// The display label.
    pub label: String,
    /// The field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldOption {
    /// The option clearing the field, for types that accept an inline script.
    #[must_use]
    pub fn none() -> Self {
        Self {
            label: NONE_OPTION_LABEL.to_string(),
            value: None,
        }
    }

    /// An option for a discovered field.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            value: Some(name),
        }
    }
}

/// A previous metric that a pipeline aggregation can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricOption {
    /// The referenced metric id.
    pub value: String,
    /// A description such as `"Average latency"`.
    pub label: String,
}

/// The control used to pick the metric's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldControl {
    /// The type reads no field (e.g. `count`, `bucket_script`).
    Hidden,
    /// A document field picker, for basic aggregations reading a field.
    FieldPicker {
        /// Placeholder shown while no field is selected.
        placeholder: &'static str,
        /// The currently selected field.
        value: Option<String>,
        /// The selectable fields.
        options: Vec<FieldOption>,
    },
    /// A picker over previous metrics, for pipeline aggregations with a
    /// single input.
    MetricPicker {
        /// The id of the currently referenced metric.
        value: Option<String>,
        /// The previous metrics.
        options: Vec<MetricOption>,
    },
}

/// The view model of one metric row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricEditorView {
    /// The metric id.
    pub id: String,
    /// The metric's current type.
    pub selected: TypeOption,
    /// The types that may be picked, in registry order.
    pub type_options: Vec<TypeOption>,
    /// How the metric's input is picked.
    pub field_control: FieldControl,
    /// Whether the type has a settings editor.
    pub has_settings_editor: bool,
    /// Whether the metric is hidden from results.
    pub hidden: bool,
}

/// Returns the metrics that come before the one with `id`.
///
/// If no metric has that id, every metric is considered previous.
#[must_use]
pub fn previous_metrics<'a>(metrics: &'a [MetricAggregation], id: &str) -> &'a [MetricAggregation] {
    match metrics.iter().position(|m| m.id == id) {
        Some(index) => &metrics[..index],
        None => metrics,
    }
}

/// Returns the options for a field picker: the discovered fields in order,
/// preceded by a "None" option when the type accepts an inline script.
#[must_use]
pub fn field_options(descriptor: &AggregationTypeDescriptor, fields: &[String]) -> Vec<FieldOption> {
    let none = descriptor
        .supports_inline_script
        .then(FieldOption::none);

    none.into_iter()
        .chain(fields.iter().map(FieldOption::field))
        .collect()
}

/// Describes a metric for a metric picker: the type label, followed by the
/// field for types that read one. Unknown types are described by their raw
/// identifier.
#[must_use]
pub fn describe_metric(registry: &AggregationRegistry, metric: &MetricAggregation) -> String {
    match (registry.get(&metric.metric_type), metric.field.as_deref()) {
        (Some(descriptor), Some(field)) if descriptor.requires_field => {
            format!("{} {field}", descriptor.label)
        }
        (Some(descriptor), _) => descriptor.label.to_string(),
        (None, _) => metric.metric_type.clone(),
    }
}

impl MetricEditorView {
    /// Builds the view of the metric with `id`.
    ///
    /// `fields` are the document fields discovered on the data source; they
    /// are only used for the field picker.
    ///
    /// # Errors
    ///
    /// Returns an error if no metric has that id, or if its type is unknown.
    pub fn build(
        registry: &AggregationRegistry,
        metrics: &[MetricAggregation],
        id: &str,
        es_version: &str,
        fields: &[String],
    ) -> Result<Self, EditorError> {
        let metric = metrics
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| EditorError::MetricNotFound(id.to_string()))?;

        let descriptor =
            registry
                .get(&metric.metric_type)
                .ok_or_else(|| EditorError::UnknownType {
                    id: metric.id.clone(),
                    metric_type: metric.metric_type.clone(),
                })?;

        let previous = previous_metrics(metrics, id);

        let field_control = if descriptor.requires_field && descriptor.is_basic() {
            FieldControl::FieldPicker {
                placeholder: FIELD_PLACEHOLDER,
                value: metric.field.clone(),
                options: field_options(descriptor, fields),
            }
        } else if descriptor.is_pipeline_agg && !descriptor.supports_multiple_bucket_paths {
            FieldControl::MetricPicker {
                value: metric.field.clone(),
                options: previous
                    .iter()
                    .map(|m| MetricOption {
                        value: m.id.clone(),
                        label: describe_metric(registry, m),
                    })
                    .collect(),
            }
        } else {
            FieldControl::Hidden
        };

        Ok(Self {
            id: metric.id.clone(),
            selected: TypeOption {
                value: descriptor.id,
                label: descriptor.label,
            },
            type_options: eligible_types(registry, previous, es_version),
            field_control,
            has_settings_editor: descriptor.has_settings,
            hidden: metric.hide,
        })
    }

    /// Turns a type pick into an action.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::IneligibleType`] if the type is not among
    /// [`type_options`](Self::type_options).
    pub fn change_type(&self, metric_type: &str) -> Result<MetricAggregationAction, EditorError> {
        if !self.type_options.iter().any(|o| o.value == metric_type) {
            return Err(EditorError::IneligibleType {
                id: self.id.clone(),
                metric_type: metric_type.to_string(),
            });
        }

        Ok(MetricAggregationAction::ChangeMetricType {
            id: self.id.clone(),
            metric_type: metric_type.to_string(),
        })
    }

    /// Turns a field pick into an action.
    ///
    /// Field pickers accept any offered option; while no fields have been
    /// discovered they accept any field name. Metric pickers accept the id of
    /// a previous metric.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoFieldControl`] if the type reads no field, or
    /// [`EditorError::InvalidField`] if the pick is not offered.
    pub fn change_field(
        &self,
        field: Option<String>,
    ) -> Result<MetricAggregationAction, EditorError> {
        let accepted = match &self.field_control {
            FieldControl::Hidden => return Err(EditorError::NoFieldControl(self.id.clone())),
            FieldControl::FieldPicker { options, .. } => {
                options.iter().any(|o| o.value == field)
                    || (field.is_some() && options.iter().all(|o| o.value.is_none()))
            }
            FieldControl::MetricPicker { options, .. } => options
                .iter()
                .any(|o| Some(o.value.as_str()) == field.as_deref()),
        };

        if !accepted {
            return Err(EditorError::InvalidField {
                id: self.id.clone(),
                field,
            });
        }

        Ok(MetricAggregationAction::ChangeMetricField {
            id: self.id.clone(),
            field,
        })
    }
}
