use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A flat bundle of named integer counters for one player, optionally scoped
/// to a tournament event/window pair. Empty `event_id` and `window_id` mark a
/// global aggregate record. Counter names differ between global and
/// tournament records, so they are kept as a flattened map rather than a
/// fixed struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub epic_id: String,
    pub epic_username: String,
    pub event_id: String,
    pub window_id: String,
    #[serde(flatten)]
    pub counters: BTreeMap<String, i64>,
}

impl StatRecord {
    pub fn is_global(&self) -> bool {
        self.event_id.is_empty() && self.window_id.is_empty()
    }

    pub fn counter(&self, name: &str) -> Option<i64> {
        self.counters.get(name).copied()
    }
}
