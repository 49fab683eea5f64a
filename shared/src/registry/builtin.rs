//! The built-in Elasticsearch metric aggregation types.

use super::descriptor::AggregationTypeDescriptor as Agg;

/// Every metric aggregation type offered by the editor, in the order they
/// are presented.
pub static BUILTIN_AGGREGATIONS: [Agg; 19] = [
    Agg::basic("count", "Count"),
    Agg::basic("avg", "Average")
        .requires_field()
        .supports_inline_script()
        .supports_missing()
        .has_settings(),
    Agg::basic("sum", "Sum")
        .requires_field()
        .supports_inline_script()
        .supports_missing()
        .has_settings(),
    Agg::basic("max", "Max")
        .requires_field()
        .supports_inline_script()
        .supports_missing()
        .has_settings(),
    Agg::basic("min", "Min")
        .requires_field()
        .supports_inline_script()
        .supports_missing()
        .has_settings(),
    Agg::basic("extended_stats", "Extended Stats")
        .requires_field()
        .supports_inline_script()
        .supports_missing()
        .has_settings()
        .has_meta(),
    Agg::basic("percentiles", "Percentiles")
        .requires_field()
        .supports_inline_script()
        .supports_missing()
        .has_settings(),
    Agg::basic("cardinality", "Unique Count")
        .requires_field()
        .supports_missing()
        .has_settings(),
    Agg::pipeline("moving_avg", "Moving Average")
        .requires_field()
        .has_settings()
        .versions(">=2.0.0 <8.0.0"),
    Agg::pipeline("moving_fn", "Moving Function")
        .requires_field()
        .has_settings()
        .versions(">=7.0.0"),
    Agg::pipeline("derivative", "Derivative")
        .requires_field()
        .has_settings()
        .versions(">=2.0.0"),
    Agg::pipeline("serial_diff", "Serial Difference")
        .requires_field()
        .has_settings()
        .versions(">=2.0.0"),
    Agg::pipeline("cumulative_sum", "Cumulative Sum")
        .requires_field()
        .has_settings()
        .versions(">=2.0.0"),
    Agg::pipeline("bucket_script", "Bucket Script")
        .supports_multiple_bucket_paths()
        .has_settings()
        .versions(">=2.0.0"),
    Agg::basic("raw_document", "Raw Document (legacy)")
        .single_metric()
        .has_settings(),
    Agg::basic("raw_data", "Raw Data").single_metric().has_settings(),
    Agg::basic("logs", "Logs").single_metric(),
    Agg::basic("top_metrics", "Top Metrics")
        .has_settings()
        .xpack()
        .versions(">=7.7.0"),
    Agg::basic("rate", "Rate")
        .requires_field()
        .supports_inline_script()
        .supports_missing()
        .has_settings()
        .versions(">=7.10.0"),
];
