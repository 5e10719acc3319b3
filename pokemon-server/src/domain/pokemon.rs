//! The persisted Pokémon record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PokemonName;

/// A Pokémon as stored locally.
///
/// Created once, on the first successful upstream fetch for a name, and
/// never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    /// Upstream identifier.
    pub id: i64,

    /// Normalized lookup key.
    pub name: PokemonName,

    pub height: i64,

    pub weight: i64,

    /// Default front sprite, if upstream has one.
    pub sprite_url: Option<String>,

    /// Ability names, in upstream order.
    pub abilities: Vec<String>,

    /// Type names, in upstream order.
    pub types: Vec<String>,

    /// When the record was created. Informational only; records never expire.
    pub cached_at: DateTime<Utc>,
}
