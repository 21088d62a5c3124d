use std::fmt;

/// Slot name used by the shared (unscoped) profile.
pub const FAVORITES_SLOT: &str = "movie-favorites";

/// Identifies whose favorites a store instance reads and writes.
///
/// The shared profile maps to the bare `movie-favorites` slot, so data written
/// before profiles existed stays readable. Named profiles get their own slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProfileKey(Option<String>);

impl ProfileKey {
    /// The device-wide profile shared by every user.
    pub fn shared() -> Self {
        Self(None)
    }

    /// A per-user profile. Blank names fall back to the shared profile.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_string()))
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_shared(&self) -> bool {
        self.0.is_none()
    }

    /// Slot key holding this profile's favorites.
    pub fn slot_key(&self) -> String {
        match &self.0 {
            None => FAVORITES_SLOT.to_string(),
            Some(name) => format!("{}:{}", FAVORITES_SLOT, name),
        }
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => write!(f, "<shared>"),
            Some(name) => write!(f, "{}", name),
        }
    }
}
