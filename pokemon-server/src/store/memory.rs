//! In-process record store.

use moka::future::Cache as MokaCache;

use crate::domain::{PokemonName, PokemonRecord};

use super::{PokemonStore, StoreError};

/// Record store held in process memory.
///
/// Built with no TTL and no capacity bound, so nothing is ever evicted.
/// Contents are lost on restart; use [`super::JsonFileStore`] to persist.
#[derive(Clone)]
pub struct MemoryStore {
    records: MokaCache<PokemonName, PokemonRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: MokaCache::builder().build(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PokemonStore for MemoryStore {
    async fn find_by_name(
        &self,
        name: &PokemonName,
    ) -> Result<Option<PokemonRecord>, StoreError> {
        Ok(self.records.get(name).await)
    }

    async fn create(&self, record: PokemonRecord) -> Result<PokemonRecord, StoreError> {
        let entry = self
            .records
            .entry_by_ref(&record.name)
            .or_insert(record.clone())
            .await;

        if entry.is_fresh() {
            Ok(record)
        } else {
            Err(StoreError::Duplicate(record.name))
        }
    }

    async fn len(&self) -> usize {
        self.records.run_pending_tasks().await;
        self.records.entry_count() as usize
    }
}
