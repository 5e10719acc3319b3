//! PokéAPI client.
//!
//! This module provides an HTTP client for PokéAPI (<https://pokeapi.co>),
//! the upstream source of Pokémon data.
//!
//! Only `GET /pokemon/{name}` is used. The response is large; we read the
//! id, name, height, weight, default front sprite, abilities, and types.

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, PokeApiClient, PokeApiConfig};
pub use convert::convert_pokemon;
pub use error::PokeApiError;
pub use types::{ApiAbilitySlot, ApiPokemon, ApiSprites, ApiTypeSlot, NamedResource};
