//! Most-recently-used list of committed colors.

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

/// The hex strings of recently committed colors, newest first.
///
/// Entries are unique ignoring case; pushing a color that is already present
/// moves it to the front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct ColorHistory {
    capacity: usize,
    entries: Vec<String>,
}

/// The serialized shape of a [`ColorHistory`], rebuilt through
/// [`ColorHistory::push`] so a stored list obeys the same rules as a live one.
#[derive(Deserialize)]
struct StoredHistory {
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default)]
    entries: Vec<String>,
}

fn default_capacity() -> usize {
    ColorHistory::DEFAULT_CAPACITY
}

impl From<StoredHistory> for ColorHistory {
    fn from(stored: StoredHistory) -> Self {
        let mut history = Self::with_capacity(stored.capacity);
        for entry in stored.entries.iter().rev() {
            history.push(entry);
        }
        history
    }
}

impl ColorHistory {
    /// The number of entries kept when no capacity is given.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create an empty history that keeps at most `capacity` entries. A
    /// capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Vec::new(),
        }
    }

    /// Add `hex` to the front, dropping any earlier copy and the oldest
    /// entries beyond the capacity.
    pub fn push(&mut self, hex: &str) -> &[String] {
        let hex = hex.trim().to_lowercase();
        self.entries.retain(|entry| *entry != hex);
        self.entries.insert(0, hex);
        self.entries.truncate(self.capacity);
        &self.entries
    }

    /// Add a committed color, keyed by its 6-digit hex.
    pub fn record(&mut self, value: &ColorValue) -> &[String] {
        self.push(&value.hex)
    }

    /// The entries, newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// The maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}
