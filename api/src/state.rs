//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use crate::config::{Config, DEFAULT_ES_VERSION};
use shared::registry::AggregationRegistry;
use shared::sidemenu::NavLink;
use std::sync::Arc;

/// Application state shared across all request handlers.
///
/// Everything in here is read-only once the server has started.
#[derive(Clone)]
pub struct AppState {
    /// The aggregation types offered by the editor.
    registry: AggregationRegistry,
    /// Elasticsearch version used when a request does not name one.
    es_version: Arc<str>,
    /// Links shown at the bottom of the sidebar.
    bottom_nav: Arc<[NavLink]>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        registry: AggregationRegistry,
        es_version: impl Into<Arc<str>>,
        bottom_nav: Vec<NavLink>,
    ) -> Self {
        Self {
            registry,
            es_version: es_version.into(),
            bottom_nav: bottom_nav.into(),
        }
    }

    /// Creates the state for a server started with the given configuration.
    ///
    /// The sidebar bottom section has no links of its own; only the sign-in
    /// prompt is shown there.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            AggregationRegistry::builtin(),
            config.es_version.as_str(),
            Vec::new(),
        )
    }

    /// Returns the aggregation registry.
    #[must_use]
    pub fn registry(&self) -> &AggregationRegistry {
        &self.registry
    }

    /// Returns the default Elasticsearch version.
    #[must_use]
    pub fn es_version(&self) -> &str {
        &self.es_version
    }

    /// Returns the sidebar bottom links.
    #[must_use]
    pub fn bottom_nav(&self) -> &[NavLink] {
        &self.bottom_nav
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AggregationRegistry::builtin(), DEFAULT_ES_VERSION, Vec::new())
    }
}
