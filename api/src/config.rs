//! Server configuration module.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Elasticsearch version assumed when none is configured.
pub const DEFAULT_ES_VERSION: &str = "7.10.0";

/// Server configuration.
///
/// Configuration values can be set via environment variables (a `.env` file
/// in the working directory is loaded first, if present):
/// - `ESMETRICS_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `ESMETRICS_PORT`: The port to listen on (default: 8080)
/// - `ESMETRICS_ES_VERSION`: Elasticsearch version used when a request does
///   not name one (default: "7.10.0")
#[derive(Debug, Clone)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// The default Elasticsearch version.
    pub es_version: String,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `ESMETRICS_PORT` is set but cannot be parsed as a valid port number
    /// - `ESMETRICS_ES_VERSION` is set but is not a valid version
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded environment file");
        }

        let host = std::env::var("ESMETRICS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("ESMETRICS_PORT")
            .ok()
            .map(|p| p.parse::<u16>())
            .transpose()
            .context("ESMETRICS_PORT must be a valid port number")?
            .unwrap_or(8080);

        let es_version = std::env::var("ESMETRICS_ES_VERSION")
            .unwrap_or_else(|_| DEFAULT_ES_VERSION.to_string());
        shared::version::parse_version(&es_version)
            .context("ESMETRICS_ES_VERSION must be a semantic version such as 7.10.0")?;

        Ok(Self {
            host,
            port,
            es_version,
        })
    }

    /// Returns the socket address for binding.
    ///
    /// # Panics
    ///
    /// Panics if the host and port combination cannot be parsed as a valid socket address.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address from config")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            es_version: DEFAULT_ES_VERSION.to_string(),
        }
    }
}
