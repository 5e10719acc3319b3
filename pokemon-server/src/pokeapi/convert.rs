//! Conversion from PokéAPI responses to domain records.

use chrono::{DateTime, Utc};

use crate::domain::{PokemonName, PokemonRecord};

use super::types::ApiPokemon;

/// Build a record for `name` from an upstream response.
///
/// The record is keyed by the requested name rather than `api.name`, so a
/// later lookup with the same input hits the store. Only the first ability
/// by position is kept; every type is kept, in upstream order.
pub fn convert_pokemon(
    name: &PokemonName,
    api: ApiPokemon,
    cached_at: DateTime<Utc>,
) -> PokemonRecord {
    let abilities = api
        .abilities
        .into_iter()
        .next()
        .map(|slot| slot.ability.name)
        .into_iter()
        .collect();

    let types = api.types.into_iter().map(|slot| slot.kind.name).collect();

    PokemonRecord {
        id: api.id,
        name: name.clone(),
        height: api.height,
        weight: api.weight,
        sprite_url: api.sprites.front_default,
        abilities,
        types,
        cached_at,
    }
}
