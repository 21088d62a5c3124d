//! FileSlotStorage - one file per slot under a root directory.
//!
//! Writes go to a `.tmp` sibling first and are renamed over the slot file, so a
//! reader never sees a half-written value.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SlotError, SlotStorage};

const SLOT_EXTENSION: &str = "json";

/// Slot storage persisted as files on disk.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    root: PathBuf,
}

impl FileSlotStorage {
    /// Use `root` as the slot directory. It is created on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path backing the given slot key.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", file_stem(key), SLOT_EXTENSION))
    }
}

/// Map a slot key to a file stem.
///
/// Lowercase ASCII letters, digits, `-` and `_` are kept, as is `.` anywhere
/// but the first position. Every other byte becomes `%XX`, so distinct keys
/// always map to distinct stems, even on case-insensitive filesystems. The
/// empty key maps to a lone `%`, which no escape sequence can produce.
fn file_stem(key: &str) -> String {
    if key.is_empty() {
        return "%".to_string();
    }

    let mut stem = String::with_capacity(key.len());
    for (i, byte) in key.bytes().enumerate() {
        let keep = byte.is_ascii_lowercase()
            || byte.is_ascii_digit()
            || matches!(byte, b'-' | b'_')
            || (byte == b'.' && i > 0);
        if keep {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{:02X}", byte));
        }
    }
    stem
}

impl SlotStorage for FileSlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::io(key, e)),
        }
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), SlotError> {
        fs::create_dir_all(&self.root).map_err(|e| SlotError::io(key, e))?;

        let path = self.slot_path(key);
        let tmp_path = path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp_path).map_err(|e| SlotError::io(key, e))?;
            file.write_all(value.as_bytes())
                .and_then(|_| file.sync_all())
                .map_err(|e| SlotError::io(key, e))?;
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SlotError::io(key, e));
        }

        debug!(slot = key, path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<bool, SlotError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SlotError::io(key, e)),
        }
    }
}
