//! PokéAPI response DTOs.
//!
//! Only the fields we read are declared; serde ignores the rest of the
//! (very large) `/pokemon/{name}` payload.

use serde::Deserialize;

/// Response from `GET /pokemon/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: i64,

    pub name: String,

    /// Height in decimetres.
    pub height: i64,

    /// Weight in hectograms.
    pub weight: i64,

    pub sprites: ApiSprites,

    pub abilities: Vec<ApiAbilitySlot>,

    pub types: Vec<ApiTypeSlot>,
}

/// Sprite URLs. Upstream sends `null` for missing artwork.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSprites {
    pub front_default: Option<String>,
}

/// One entry of the `abilities` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAbilitySlot {
    pub ability: NamedResource,
}

/// One entry of the `types` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A `{ "name": ..., "url": ... }` reference to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}
