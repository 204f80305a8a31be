//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use crate::finder::FinderConfig;

/// Default listen address.
const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default directory for static assets.
const DEFAULT_STATIC_DIR: &str = "static";

/// Error for an environment variable that is set but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote filter API settings
    pub finder: FinderConfig,
    /// Serve restaurants from this JSON file instead of the remote API
    pub mock_data: Option<PathBuf>,
    /// Address to listen on
    pub bind: SocketAddr,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// - `FINDER_API_URL`: base URL of the filter API
    /// - `FINDER_TIMEOUT_SECS`: request timeout (unset = none)
    /// - `FINDER_MOCK_DATA`: JSON file to serve instead of the API
    /// - `FINDER_BIND`: listen address (default `127.0.0.1:3000`)
    /// - `FINDER_STATIC_DIR`: static asset directory (default `static`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut finder = FinderConfig::default();
        if let Some(url) = var("FINDER_API_URL") {
            finder = finder.with_base_url(url);
        }
        if let Some(secs) = var("FINDER_TIMEOUT_SECS") {
            let secs = secs.trim().parse().map_err(|e| ConfigError {
                key: "FINDER_TIMEOUT_SECS",
                message: format!("{e}"),
            })?;
            finder = finder.with_timeout(secs);
        }

        let bind = var("FINDER_BIND")
            .unwrap_or_else(|| {
                info!("FINDER_BIND not set, using default: {DEFAULT_BIND}");
                DEFAULT_BIND.to_string()
            })
            .trim()
            .parse()
            .map_err(|e| ConfigError {
                key: "FINDER_BIND",
                message: format!("{e}"),
            })?;

        Ok(Self {
            finder,
            mock_data: var("FINDER_MOCK_DATA").map(PathBuf::from),
            bind,
            static_dir: var("FINDER_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }
}
