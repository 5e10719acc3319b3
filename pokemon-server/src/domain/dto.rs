//! Response shape for Pokémon lookups.

use serde::Serialize;

use super::PokemonRecord;

/// A Pokémon as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDto {
    pub id: i64,

    pub name: String,

    pub height: i64,

    pub weight: i64,

    /// Default front sprite URL
    pub sprite_url: Option<String>,

    pub abilities: Vec<String>,

    pub types: Vec<String>,
}

impl From<PokemonRecord> for PokemonDto {
    fn from(record: PokemonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.into(),
            height: record.height,
            weight: record.weight,
            sprite_url: record.sprite_url,
            abilities: record.abilities,
            types: record.types,
        }
    }
}
