//! Local record store.
//!
//! The store sits in front of PokéAPI: a record is written the first time a
//! name is fetched and served from here on every later lookup. Records are
//! never refreshed, expired, or deleted.

mod error;
mod file;
mod memory;

use std::future::Future;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::domain::{PokemonName, PokemonRecord};

/// Key-value store of Pokémon records, keyed by normalized name.
pub trait PokemonStore {
    /// Look up the record for `name`, if one has been stored.
    fn find_by_name(
        &self,
        name: &PokemonName,
    ) -> impl Future<Output = Result<Option<PokemonRecord>, StoreError>> + Send;

    /// Insert a new record.
    ///
    /// Fails with [`StoreError::Duplicate`] if a record with the same name
    /// already exists; the existing record is left untouched.
    fn create(
        &self,
        record: PokemonRecord,
    ) -> impl Future<Output = Result<PokemonRecord, StoreError>> + Send;

    /// Number of stored records.
    fn len(&self) -> impl Future<Output = usize> + Send;
}
