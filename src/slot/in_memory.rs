//! InMemorySlotStorage - HashMap-backed slots for testing and ephemeral sessions.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use super::{SlotError, SlotStorage};

/// In-memory slot storage backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same slots, like two handles onto
/// one browser profile's local storage.
#[derive(Clone, Default)]
pub struct InMemorySlotStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl fmt::Debug for InMemorySlotStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemorySlotStorage")
            .field("slots", &self.len())
            .finish()
    }
}

impl InMemorySlotStorage {
    /// Create a new empty slot storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently written.
    pub fn len(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SlotStorage for InMemorySlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, SlotError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| SlotError::LockPoisoned("read"))?;
        Ok(slots.get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), SlotError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| SlotError::LockPoisoned("write"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<bool, SlotError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| SlotError::LockPoisoned("remove"))?;
        Ok(slots.remove(key).is_some())
    }
}
