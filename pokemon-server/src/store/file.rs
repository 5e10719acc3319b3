//! Disk-backed record store.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{PokemonName, PokemonRecord};

use super::{PokemonStore, StoreError};

/// On-disk layout of the store file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    records: Vec<PokemonRecord>,
}

/// Record store persisted as a single JSON file.
///
/// The whole file is loaded on open and rewritten on every create. Writes go
/// to a sibling temporary file first and are renamed into place.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Arc<RwLock<BTreeMap<PokemonName, PokemonRecord>>>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let records = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let file: StoreFile =
                    serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                        path: path.clone(),
                        message: e.to_string(),
                    })?;
                file.records
                    .into_iter()
                    .map(|r| (r.name.clone(), r))
                    .collect()
            }
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        debug!(path = %path.display(), records = records.len(), "opened store file");

        Ok(Self {
            path,
            records: Arc::new(RwLock::new(records)),
        })
    }

    /// Get the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_file(
        &self,
        records: &BTreeMap<PokemonName, PokemonRecord>,
    ) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        // Create parent directories if needed
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let file = StoreFile {
            records: records.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;

        Ok(())
    }
}

impl PokemonStore for JsonFileStore {
    async fn find_by_name(
        &self,
        name: &PokemonName,
    ) -> Result<Option<PokemonRecord>, StoreError> {
        Ok(self.records.read().await.get(name).cloned())
    }

    async fn create(&self, record: PokemonRecord) -> Result<PokemonRecord, StoreError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.name) {
            return Err(StoreError::Duplicate(record.name));
        }

        records.insert(record.name.clone(), record.clone());

        if let Err(e) = self.write_file(&records).await {
            records.remove(&record.name);
            return Err(e);
        }

        Ok(record)
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
