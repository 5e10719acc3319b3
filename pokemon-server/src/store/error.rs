//! Store error types.

use std::path::PathBuf;

use crate::domain::PokemonName;

/// Errors that can occur when reading or writing the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with this name already exists
    #[error("record already exists: {0}")]
    Duplicate(PokemonName),

    /// Reading or writing the backing file failed
    #[error("store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file could not be (de)serialized
    #[error("store file {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}
