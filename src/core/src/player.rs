use serde::{Deserialize, Serialize};

/// A single registry entry: display name paired with the opaque
/// 32-character epic identifier used across all stat records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub username: String,
    pub epic_id: String,
}

/// Read-only mapping of player display names to epic identifiers.
/// Populated once at startup, never mutated. Insertion order is preserved
/// so the dashboard renders players in the order they were registered.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    entries: Vec<PlayerEntry>,
}

impl PlayerRegistry {
    pub fn new(entries: Vec<PlayerEntry>) -> Self {
        PlayerRegistry { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerEntry> {
        self.entries.iter()
    }

    pub fn epic_id_of(&self, username: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.epic_id.as_str())
    }

    pub fn username_of(&self, epic_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.epic_id == epic_id)
            .map(|entry| entry.username.as_str())
    }
}
