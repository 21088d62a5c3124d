//! Favorites - the local catalog store every view reads and toggles.
//!
//! The whole favorites collection lives in a single slot as a JSON array of
//! `MovieSummary` records. Every mutation reads the array, changes it in memory
//! and writes it back as one unit.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_store::{InMemorySlotStorage, LocalCatalogStore, MovieSummary, ProfileKey};
//!
//! let store = LocalCatalogStore::new(InMemorySlotStorage::new(), ProfileKey::named("alice"));
//! let now_favorite = store.toggle(&MovieSummary::new(27205, "Inception"));
//! assert!(now_favorite);
//! assert!(store.contains(27205));
//! ```

mod profile;
mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::MovieSummary;

/// How `add` treats a record whose id is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddPolicy {
    /// Replace the existing record in place; drop any further copies of the id.
    #[default]
    Upsert,
    /// Append unconditionally, keeping duplicates.
    Append,
}

impl fmt::Display for AddPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddPolicy::Upsert => write!(f, "upsert"),
            AddPolicy::Append => write!(f, "append"),
        }
    }
}

impl FromStr for AddPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsert" => Ok(AddPolicy::Upsert),
            "append" => Ok(AddPolicy::Append),
            other => Err(format!("unknown add policy '{}'", other)),
        }
    }
}

/// A listing entry paired with its favorited flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteStatus {
    pub movie: MovieSummary,
    pub favorite: bool,
}

pub use profile::{ProfileKey, FAVORITES_SLOT};
pub use store::LocalCatalogStore;
