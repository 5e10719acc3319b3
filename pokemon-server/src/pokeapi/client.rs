//! PokéAPI HTTP client.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::domain::PokemonName;
use crate::lookup::PokemonProvider;

use super::error::PokeApiError;
use super::types::ApiPokemon;

/// Default base URL for PokéAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unparseable body to keep for error messages.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the PokéAPI client.
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    /// Base URL for the API (defaults to the public PokéAPI)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PokeApiConfig {
    /// Create a config pointing at the public PokéAPI.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// PokéAPI client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PokeApiConfig) -> Result<Self, PokeApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| PokeApiError::Config(format!("base URL {:?}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(PokeApiError::Config(format!(
                "base URL {:?} cannot have path segments",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The URL requested for `name`: `{base_url}/pokemon/{name}`.
    ///
    /// The name is percent-encoded as a single path segment. Returns `None`
    /// for `.` and `..`, which URL normalization would resolve away from the
    /// `pokemon/` collection.
    pub fn pokemon_url(&self, name: &PokemonName) -> Option<Url> {
        if matches!(name.as_str(), "." | "..") {
            return None;
        }

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("pokemon").push(name.as_str());
        }
        Some(url)
    }

    /// Fetch a single Pokémon by name.
    pub async fn get_pokemon(&self, name: &PokemonName) -> Result<ApiPokemon, PokeApiError> {
        let Some(url) = self.pokemon_url(name) else {
            return Err(PokeApiError::NotFound {
                name: name.to_string(),
            });
        };
        debug!(%url, "fetching from PokéAPI");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PokeApiError::NotFound {
                name: name.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PokeApiError::Api {
                status: status.as_u16(),
                message: snippet(&body),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PokeApiError::Json {
            message: e.to_string(),
            body: Some(snippet(&body)),
        })
    }
}

/// The first `BODY_SNIPPET_CHARS` characters of `body`.
fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}

impl PokemonProvider for PokeApiClient {
    async fn fetch(&self, name: &PokemonName) -> Result<ApiPokemon, PokeApiError> {
        self.get_pokemon(name).await
    }
}
