//! Aggregation type registry.
//!
//! The registry is an immutable, ordered table of [`AggregationTypeDescriptor`]s.
//! Its declaration order is the order in which types are offered to the user,
//! so every lookup preserves it.
//!
//! # Example
//!
//! ```
//! use shared::registry::AggregationRegistry;
//!
//! let registry = AggregationRegistry::builtin();
//!
//! assert_eq!(registry.get("avg").map(|d| d.label), Some("Average"));
//! assert!(registry.get("derivative").is_some_and(|d| d.is_pipeline_agg));
//! assert!(registry.get("nope").is_none());
//! ```

mod builtin;
mod descriptor;

pub use builtin::BUILTIN_AGGREGATIONS;
pub use descriptor::AggregationTypeDescriptor;

use crate::version::VersionRangeError;
use thiserror::Error;

/// Errors that make a registry table unusable.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two descriptors share a type identifier.
    #[error("Duplicate aggregation type: '{0}'")]
    DuplicateType(&'static str),

    /// A descriptor has an empty type identifier or label.
    #[error("Aggregation type at position {0} has an empty id or label")]
    EmptyDescriptor(usize),

    /// A descriptor declares a version range that does not parse.
    #[error("Aggregation type '{id}' has an invalid version range: {source}")]
    InvalidVersionRange {
        /// The type identifier.
        id: &'static str,
        /// The parse error.
        source: VersionRangeError,
    },
}

/// An ordered, read-only table of aggregation types.
///
/// The table is `'static` and never mutated, so a registry is `Copy` and can
/// be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct AggregationRegistry {
    descriptors: &'static [AggregationTypeDescriptor],
}

impl AggregationRegistry {
    /// Creates a registry over the given table.
    #[must_use]
    pub const fn new(descriptors: &'static [AggregationTypeDescriptor]) -> Self {
        Self { descriptors }
    }

    /// Returns the registry of built-in Elasticsearch metric aggregations.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(&BUILTIN_AGGREGATIONS)
    }

    /// Looks up a type by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static AggregationTypeDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Returns true if the identifier names a known type.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over the descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static AggregationTypeDescriptor> {
        self.descriptors.iter()
    }

    /// Returns the descriptors in declaration order.
    #[must_use]
    pub const fn descriptors(&self) -> &'static [AggregationTypeDescriptor] {
        self.descriptors
    }

    /// Returns the number of types.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if the registry has no types.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Checks that identifiers are unique and non-empty and that every
    /// version range parses.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in declaration order.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            if descriptor.id.is_empty() || descriptor.label.is_empty() {
                return Err(RegistryError::EmptyDescriptor(index));
            }
            if self.descriptors[..index]
                .iter()
                .any(|d| d.id == descriptor.id)
            {
                return Err(RegistryError::DuplicateType(descriptor.id));
            }
            descriptor
                .supported_versions()
                .map_err(|source| RegistryError::InvalidVersionRange {
                    id: descriptor.id,
                    source,
                })?;
        }
        Ok(())
    }
}

impl Default for AggregationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
