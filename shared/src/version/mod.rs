//! Version handling for Elasticsearch compatibility checks.
//!
//! Aggregation types declare the Elasticsearch versions they work with as a
//! range expression. This module parses those expressions and evaluates them
//! against the version configured on the data source.
//!
//! # Supported Syntax
//!
//! ```text
//! *                      any version
//! >=7.0.0                comparison
//! >=2.0.0 <8.0.0         all comparators must hold
//! <6.0.0 || >=7.7.0      any alternative may hold
//! 7.x                    x-range
//! 5.0.0 - 6.8.0          inclusive hyphen range
//! ~7.10.0  ^7.0.0        tilde and caret
//! ```
//!
//! # Example
//!
//! ```
//! use shared::version::{parse_range, parse_version};
//!
//! let range = parse_range(">=2.0.0 <8.0.0").unwrap();
//! assert!(range.matches(&parse_version("7.10.0").unwrap()));
//! assert!(!range.matches(&parse_version("8.2.0").unwrap()));
//! ```

mod parser;
mod range;

pub use parser::parse_range;
pub use range::{parse_version, VersionRange, VersionRangeError};
