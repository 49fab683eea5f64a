//! esmetrics CLI
//!
//! Command-line interface for inspecting the Elasticsearch metric aggregation
//! types offered by the query editor.
//!
//! # Usage
//!
//! ```bash
//! esmetrics --help
//! esmetrics registry
//! esmetrics types --es-version 7.10.0 --prior avg --prior derivative
//! esmetrics types --json
//! ```

#![deny(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::eligibility::{eligible_types, TypeOption};
use shared::models::MetricAggregation;
use shared::registry::{AggregationRegistry, AggregationTypeDescriptor};
use std::fmt::Write as _;

/// esmetrics CLI - Elasticsearch metric aggregation types
#[derive(Parser)]
#[command(name = "esmetrics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Elasticsearch version of the data source
    #[arg(
        short,
        long,
        global = true,
        env = "ESMETRICS_ES_VERSION",
        default_value = "7.10.0"
    )]
    es_version: String,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the aggregation types that may be picked for the next metric
    Types {
        /// Type of a metric preceding the one being edited (repeat, in order)
        #[arg(short, long = "prior", value_name = "TYPE")]
        prior: Vec<String>,
    },
    /// List every aggregation type
    Registry,
}

#[derive(Serialize)]
struct TypesOutput<'a> {
    es_version: &'a str,
    options: Vec<TypeOption>,
}

#[derive(Serialize)]
struct RegistryOutput {
    types: &'static [AggregationTypeDescriptor],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    print!("{}", run(&cli, &AggregationRegistry::builtin())?);
    Ok(())
}

/// Executes the parsed command and returns what should be printed.
fn run(cli: &Cli, registry: &AggregationRegistry) -> Result<String> {
    match &cli.command {
        Some(Commands::Types { prior }) => types(cli, registry, prior),
        Some(Commands::Registry) => list_registry(cli, registry),
        None => Ok(format!(
            "esmetrics CLI v{}\nUse --help for usage information\n",
            env!("CARGO_PKG_VERSION")
        )),
    }
}

fn types(cli: &Cli, registry: &AggregationRegistry, prior: &[String]) -> Result<String> {
    if let Err(e) = shared::version::parse_version(&cli.es_version) {
        tracing::warn!(error = %e, "Only version-independent aggregation types will be listed");
    }

    // Metric ids only need to be unique; the position stands in for one.
    let previous: Vec<MetricAggregation> = prior
        .iter()
        .enumerate()
        .map(|(index, metric_type)| MetricAggregation::new((index + 1).to_string(), metric_type))
        .collect();

    for metric in previous.iter().filter(|m| !registry.contains(&m.metric_type)) {
        tracing::warn!(metric_type = %metric.metric_type, "Unknown aggregation type ignored");
    }

    let options = eligible_types(registry, &previous, &cli.es_version);
    tracing::debug!(count = options.len(), "Computed type options");

    if cli.json {
        let output = TypesOutput {
            es_version: &cli.es_version,
            options,
        };
        return Ok(serde_json::to_string_pretty(&output)? + "\n");
    }

    let mut out = String::new();
    for option in &options {
        writeln!(out, "{:<16} {}", option.value, option.label)?;
    }
    Ok(out)
}

fn list_registry(cli: &Cli, registry: &AggregationRegistry) -> Result<String> {
    if cli.json {
        let output = RegistryOutput {
            types: registry.descriptors(),
        };
        return Ok(serde_json::to_string_pretty(&output)? + "\n");
    }

    let mut out = String::new();
    writeln!(out, "{:<16} {:<24} {:<9} VERSIONS", "TYPE", "LABEL", "PIPELINE")?;
    for descriptor in registry.iter() {
        writeln!(
            out,
            "{:<16} {:<24} {:<9} {}",
            descriptor.id,
            descriptor.label,
            if descriptor.is_pipeline_agg { "yes" } else { "no" },
            descriptor.version_range
        )?;
    }
    Ok(out)
}
