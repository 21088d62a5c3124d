//! SlotStorage - Abstract whole-value storage keyed by slot name.

use super::SlotError;

/// Durable named slots, each holding one serialized value.
///
/// Implementations must make `write_slot` all-or-nothing: a reader either sees
/// the previous value or the new one, never a mix.
pub trait SlotStorage: Send + Sync {
    /// Read the slot's value. Returns None if the slot was never written.
    fn read_slot(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Replace the slot's entire value.
    fn write_slot(&self, key: &str, value: &str) -> Result<(), SlotError>;

    /// Delete the slot. Returns true if it existed.
    fn remove_slot(&self, key: &str) -> Result<bool, SlotError>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn read_slot(&self, key: &str) -> Result<Option<String>, SlotError> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), SlotError> {
        (**self).write_slot(key, value)
    }

    fn remove_slot(&self, key: &str) -> Result<bool, SlotError> {
        (**self).remove_slot(key)
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for std::sync::Arc<S> {
    fn read_slot(&self, key: &str) -> Result<Option<String>, SlotError> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), SlotError> {
        (**self).write_slot(key, value)
    }

    fn remove_slot(&self, key: &str) -> Result<bool, SlotError> {
        (**self).remove_slot(key)
    }
}
