//! Data transfer objects for web responses.

use serde::Serialize;

pub use crate::domain::PokemonDto;

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
