//! Pokémon lookup with a local store in front of PokéAPI.
//!
//! A lookup reads the store first. On a miss it fetches from the upstream
//! provider, stores the converted record, and returns it. Stored records
//! are served as-is from then on: there is no refresh and no expiry.

use std::future::Future;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{InvalidName, PokemonDto, PokemonName};
use crate::pokeapi::{ApiPokemon, PokeApiError, convert_pokemon};
use crate::store::{PokemonStore, StoreError};

/// Source of upstream Pokémon data.
///
/// Implemented by [`crate::pokeapi::PokeApiClient`]; tests substitute their
/// own implementations.
pub trait PokemonProvider {
    /// Fetch the upstream record for `name`.
    fn fetch(
        &self,
        name: &PokemonName,
    ) -> impl Future<Output = Result<ApiPokemon, PokeApiError>> + Send;
}

/// Errors from [`PokemonLookupService::lookup`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The requested name was empty or blank
    #[error(transparent)]
    InvalidArgument(#[from] InvalidName),

    /// Upstream has no such Pokémon, or could not be reached
    #[error("Pokémon not found: {name}")]
    NotFound {
        name: PokemonName,
        #[source]
        source: PokeApiError,
    },

    /// Upstream answered with a body we could not read
    #[error("unexpected response from upstream: {0}")]
    UpstreamParse(#[source] PokeApiError),

    /// The local store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Looks up Pokémon by name, caching upstream results in a local store.
pub struct PokemonLookupService<S, P> {
    store: S,
    provider: P,
}

impl<S: PokemonStore, P: PokemonProvider> PokemonLookupService<S, P> {
    /// Create a new service over the given store and provider.
    pub fn new(store: S, provider: P) -> Self {
        Self { store, provider }
    }

    /// Look up a Pokémon by name.
    ///
    /// The name is trimmed and lower-cased before it is used. A stored
    /// record is returned without contacting upstream; otherwise the record
    /// is fetched, stored, and returned.
    pub async fn lookup(&self, raw_name: &str) -> Result<PokemonDto, LookupError> {
        let name = PokemonName::parse(raw_name)?;

        if let Some(record) = self.store.find_by_name(&name).await? {
            debug!(%name, "store hit");
            return Ok(record.into());
        }

        debug!(%name, "store miss, fetching upstream");
        let api = self
            .provider
            .fetch(&name)
            .await
            .map_err(|e| classify_provider_error(&name, e))?;

        let record = convert_pokemon(&name, api, Utc::now());

        let stored = match self.store.create(record).await {
            Ok(record) => {
                info!(%name, id = record.id, "stored new record");
                record
            }
            // Another request for the same name stored it first.
            Err(StoreError::Duplicate(_)) => {
                debug!(%name, "lost create race, reading stored record");
                self.store
                    .find_by_name(&name)
                    .await?
                    .ok_or(StoreError::Duplicate(name))?
            }
            Err(e) => return Err(e.into()),
        };

        Ok(stored.into())
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn classify_provider_error(name: &PokemonName, err: PokeApiError) -> LookupError {
    match err {
        PokeApiError::Json { .. } => {
            warn!(%name, error = %err, "unreadable upstream response");
            LookupError::UpstreamParse(err)
        }
        PokeApiError::NotFound { .. } => LookupError::NotFound {
            name: name.clone(),
            source: err,
        },
        _ => {
            warn!(%name, error = %err, "upstream request failed, reporting not found");
            LookupError::NotFound {
                name: name.clone(),
                source: err,
            }
        }
    }
}
