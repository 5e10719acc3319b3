//! PokéAPI client error types.

/// Errors from the PokéAPI HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum PokeApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream has no Pokémon with this name
    #[error("Pokémon not found upstream: {name}")]
    NotFound { name: String },

    /// API returned a non-success status other than 404
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Client could not be built from its configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}
