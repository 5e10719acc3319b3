//! Process configuration.
//!
//! Read once from environment variables in `main` and passed explicitly to
//! the components that need it.

use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::Url;

use crate::pokeapi::{DEFAULT_BASE_URL, PokeApiConfig};

/// Upstream base URL.
pub const ENV_BASE_URL: &str = "POKEAPI_BASE_URL";
/// Upstream request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "POKEAPI_TIMEOUT_SECS";
/// Address to listen on.
pub const ENV_BIND_ADDR: &str = "POKEMON_BIND_ADDR";
/// Path of the JSON store file. Unset means an in-memory store.
pub const ENV_STORE_PATH: &str = "POKEMON_STORE_PATH";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream client settings
    pub pokeapi: PokeApiConfig,
    /// Listen address
    pub bind_addr: SocketAddr,
    /// JSON store file, or `None` for an in-memory store
    pub store_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = match lookup(ENV_BASE_URL) {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::Empty { var: ENV_BASE_URL });
            }
            Some(url) => url.trim().to_string(),
            None => DEFAULT_BASE_URL.to_string(),
        };
        validate_base_url(&base_url)?;

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bind_raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: ENV_BIND_ADDR,
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let store_path = lookup(ENV_STORE_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            pokeapi: PokeApiConfig::new()
                .with_base_url(base_url)
                .with_timeout(timeout_secs),
            bind_addr,
            store_path,
        })
    }
}

/// The upstream base URL must be an absolute http(s) URL.
fn validate_base_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var: ENV_BASE_URL,
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }

    Ok(())
}
