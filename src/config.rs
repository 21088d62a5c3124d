use std::path::PathBuf;

use thiserror::Error;

use crate::favorites::{AddPolicy, LocalCatalogStore, ProfileKey};
use crate::slot::FileSlotStorage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Favorites store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding slot files (default: `./.catalog`).
    pub data_dir: PathBuf,
    /// Profile whose favorites are opened (default: shared).
    pub profile: ProfileKey,
    /// Behavior of `add` for ids already stored (default: upsert).
    pub add_policy: AddPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".catalog"),
            profile: ProfileKey::shared(),
            add_policy: AddPolicy::Upsert,
        }
    }
}

impl StoreConfig {
    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// | Env Var              | Default      |
    /// |----------------------|--------------|
    /// | `CATALOG_DATA_DIR`   | `./.catalog` |
    /// | `CATALOG_PROFILE`    | shared       |
    /// | `CATALOG_ADD_POLICY` | `upsert`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("CATALOG_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let profile = lookup("CATALOG_PROFILE")
            .map(ProfileKey::named)
            .unwrap_or(defaults.profile);

        let add_policy = match lookup("CATALOG_ADD_POLICY") {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                var: "CATALOG_ADD_POLICY",
                reason,
            })?,
            None => defaults.add_policy,
        };

        Ok(Self {
            data_dir,
            profile,
            add_policy,
        })
    }

    /// Open the configured profile's favorites on disk.
    pub fn open(&self) -> LocalCatalogStore<FileSlotStorage> {
        LocalCatalogStore::new(FileSlotStorage::new(&self.data_dir), self.profile.clone())
            .with_policy(self.add_policy)
    }
}
