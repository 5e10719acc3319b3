//! Pokémon lookup server.
//!
//! A small web API that answers `GET /pokemon/{name}` from a local store,
//! fetching from PokéAPI and storing the result the first time a name is
//! requested.

pub mod config;
pub mod domain;
pub mod lookup;
pub mod pokeapi;
pub mod store;
pub mod web;
