//! Slot storage - the durable key-value boundary behind the favorites store.
//!
//! A slot is one named location holding one text value. Writes replace the
//! whole value; there is no partial update.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_store::{InMemorySlotStorage, SlotStorage};
//!
//! let slots = InMemorySlotStorage::new();
//! slots.write_slot("movie-favorites", "[]")?;
//! assert_eq!(slots.read_slot("movie-favorites")?.as_deref(), Some("[]"));
//! ```

mod file;
mod in_memory;
mod store;

use thiserror::Error;

/// Error type for slot storage operations.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Filesystem fault while reading or writing a slot.
    #[error("slot {key} I/O error: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// In-memory backend lock was poisoned.
    #[error("slot storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl SlotError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        SlotError::Io {
            key: key.to_string(),
            source,
        }
    }
}

pub use file::FileSlotStorage;
pub use in_memory::InMemorySlotStorage;
pub use store::SlotStorage;
