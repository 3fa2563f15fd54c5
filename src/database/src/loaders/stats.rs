use serde::Deserialize;
use std::collections::BTreeMap;

const STATIC_STATS_JSON: &str = include_str!("../data/stats.json");

/// One placeholder stat record as stored in the dataset. Counter names vary
/// between global and tournament records, so everything past the identity
/// fields is collected into a flat map.
#[derive(Deserialize)]
pub struct StatRecordEntity {
    pub epic_id: String,
    pub epic_username: String,
    pub event_id: String,
    pub window_id: String,
    #[serde(flatten)]
    pub counters: BTreeMap<String, i64>,
}

pub struct StatLoader;

impl StatLoader {
    pub fn load() -> Vec<StatRecordEntity> {
        serde_json::from_str(STATIC_STATS_JSON).unwrap()
    }
}
