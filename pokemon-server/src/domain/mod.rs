//! Core domain types.
//!
//! `PokemonName` is the normalized store key; `PokemonRecord` is the shape
//! kept in the local store; `PokemonDto` is what lookups return.

mod dto;
mod name;
mod pokemon;

pub use dto::PokemonDto;
pub use name::{InvalidName, PokemonName};
pub use pokemon::PokemonRecord;
