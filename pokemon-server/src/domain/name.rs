//! Pokémon name keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid Pokémon name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid Pokémon name: {reason}")]
pub struct InvalidName {
    reason: &'static str,
}

/// A normalized Pokémon name, used as the unique store key.
///
/// Names are trimmed and lower-cased on construction, so two raw inputs
/// that differ only in case or surrounding whitespace produce equal keys.
///
/// # Examples
///
/// ```
/// use pokemon_server::domain::PokemonName;
///
/// let name = PokemonName::parse("  Bulbasaur ").unwrap();
/// assert_eq!(name.as_str(), "bulbasaur");
///
/// // Blank input is rejected
/// assert!(PokemonName::parse("").is_err());
/// assert!(PokemonName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PokemonName(String);

impl PokemonName {
    /// Parse and normalize a name.
    pub fn parse(raw: &str) -> Result<Self, InvalidName> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(InvalidName {
                reason: "must not be empty",
            });
        }

        Ok(PokemonName(trimmed.to_lowercase()))
    }

    /// Returns the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PokemonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PokemonName({})", self.0)
    }
}

impl fmt::Display for PokemonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PokemonName {
    type Error = InvalidName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PokemonName> for String {
    fn from(name: PokemonName) -> Self {
        name.0
    }
}
