//! LocalCatalogStore - profile-scoped favorites over a single slot.

use std::collections::HashSet;

use tracing::{debug, error, warn};

use super::{AddPolicy, FavoriteStatus, ProfileKey};
use crate::catalog::MovieSummary;
use crate::slot::{SlotError, SlotStorage};

/// Durable set of favorited movies for one profile.
///
/// Operations never return errors. An unreadable slot reads as empty; a storage
/// fault during a mutation leaves the previous value in place and is logged.
#[derive(Debug, Clone)]
pub struct LocalCatalogStore<S> {
    storage: S,
    profile: ProfileKey,
    slot_key: String,
    policy: AddPolicy,
}

impl<S: SlotStorage> LocalCatalogStore<S> {
    pub fn new(storage: S, profile: ProfileKey) -> Self {
        let slot_key = profile.slot_key();
        Self {
            storage,
            profile,
            slot_key,
            policy: AddPolicy::default(),
        }
    }

    /// Store over the device-wide `movie-favorites` slot.
    pub fn shared(storage: S) -> Self {
        Self::new(storage, ProfileKey::shared())
    }

    pub fn with_policy(mut self, policy: AddPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn profile(&self) -> &ProfileKey {
        &self.profile
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    pub fn policy(&self) -> AddPolicy {
        self.policy
    }

    /// All favorites in insertion order.
    pub fn list(&self) -> Vec<MovieSummary> {
        match self.read_records() {
            Ok(records) => records,
            Err(e) => {
                error!(slot = %self.slot_key, error = %e, "failed to read favorites");
                Vec::new()
            }
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.list().iter().any(|m| m.id == id)
    }

    /// First stored record with the given id.
    pub fn get(&self, id: i64) -> Option<MovieSummary> {
        self.list().into_iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    pub fn favorite_ids(&self) -> HashSet<i64> {
        self.list().iter().map(|m| m.id).collect()
    }

    /// Pair each listing entry with its favorited flag, reading the slot once.
    pub fn annotate(&self, movies: &[MovieSummary]) -> Vec<FavoriteStatus> {
        let ids = self.favorite_ids();
        movies
            .iter()
            .map(|movie| FavoriteStatus {
                favorite: ids.contains(&movie.id),
                movie: movie.clone(),
            })
            .collect()
    }

    /// Add a record according to the store's `AddPolicy`.
    pub fn add(&self, record: MovieSummary) {
        self.try_add(record);
    }

    /// Drop every record with the given id. Absent ids are a no-op.
    pub fn remove(&self, id: i64) {
        self.try_remove(id);
    }

    /// Flip the favorited state of `record` and return the resulting state.
    ///
    /// If the write fails the state is unchanged and that state is returned.
    pub fn toggle(&self, record: &MovieSummary) -> bool {
        let favorite = self.contains(record.id);
        let committed = if favorite {
            self.try_remove(record.id)
        } else {
            self.try_add(record.clone())
        };

        if committed {
            !favorite
        } else {
            favorite
        }
    }

    /// Delete the backing slot entirely.
    pub fn clear(&self) {
        match self.storage.remove_slot(&self.slot_key) {
            Ok(existed) => debug!(slot = %self.slot_key, existed, "favorites cleared"),
            Err(e) => error!(slot = %self.slot_key, error = %e, "failed to clear favorites"),
        }
    }

    /// Read the collection. A malformed value reads as empty; storage faults
    /// are returned so mutations can avoid overwriting data they never saw.
    fn read_records(&self) -> Result<Vec<MovieSummary>, SlotError> {
        let raw = match self.storage.read_slot(&self.slot_key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Vec<MovieSummary>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(
                    slot = %self.slot_key,
                    error = %e,
                    "favorites slot is not a valid collection, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn try_add(&self, record: MovieSummary) -> bool {
        let mut records = match self.read_records() {
            Ok(records) => records,
            Err(e) => {
                error!(
                    slot = %self.slot_key,
                    id = record.id,
                    error = %e,
                    "add skipped, slot unreadable"
                );
                return false;
            }
        };

        let id = record.id;
        match self.policy {
            AddPolicy::Append => records.push(record),
            AddPolicy::Upsert => match records.iter().position(|m| m.id == id) {
                Some(index) => {
                    records[index] = record;
                    let mut first = true;
                    records.retain(|m| m.id != id || std::mem::replace(&mut first, false));
                }
                None => records.push(record),
            },
        }

        self.commit(&records)
    }

    fn try_remove(&self, id: i64) -> bool {
        let mut records = match self.read_records() {
            Ok(records) => records,
            Err(e) => {
                error!(slot = %self.slot_key, id, error = %e, "remove skipped, slot unreadable");
                return false;
            }
        };

        let before = records.len();
        records.retain(|m| m.id != id);
        if records.len() == before {
            return true;
        }

        self.commit(&records)
    }

    /// Serialize the whole collection and replace the slot with it.
    fn commit(&self, records: &[MovieSummary]) -> bool {
        let value = match serde_json::to_string(records) {
            Ok(value) => value,
            Err(e) => {
                error!(slot = %self.slot_key, error = %e, "failed to serialize favorites");
                return false;
            }
        };

        match self.storage.write_slot(&self.slot_key, &value) {
            Ok(()) => {
                debug!(slot = %self.slot_key, count = records.len(), "favorites committed");
                true
            }
            Err(e) => {
                error!(slot = %self.slot_key, error = %e, "failed to write favorites");
                false
            }
        }
    }
}
