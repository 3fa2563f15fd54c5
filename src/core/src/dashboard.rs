use crate::player::PlayerRegistry;
use crate::stats::StatRecord;
use itertools::Itertools;

/// Everything the dashboard serves: the player registry and the full list of
/// stat records. Built once at startup and shared read-only between handlers.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub registry: PlayerRegistry,
    pub stats: Vec<StatRecord>,
}

impl DashboardData {
    pub fn new(registry: PlayerRegistry, stats: Vec<StatRecord>) -> Self {
        DashboardData { registry, stats }
    }

    /// Distinct tournament event ids present in the dataset, in first-seen
    /// order. Global aggregate records carry no event id and are skipped.
    pub fn tournament_event_ids(&self) -> Vec<&str> {
        self.stats
            .iter()
            .filter(|record| !record.is_global())
            .map(|record| record.event_id.as_str())
            .unique()
            .collect()
    }

    pub fn stats_for(&self, username: &str) -> impl Iterator<Item = &StatRecord> {
        self.stats
            .iter()
            .filter(move |record| record.epic_username == username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerEntry;
    use std::collections::BTreeMap;

    fn record(username: &str, event_id: &str, window_id: &str) -> StatRecord {
        StatRecord {
            epic_id: String::from("79f1994f55eb4931a148935efa188b2f"),
            epic_username: String::from(username),
            event_id: String::from(event_id),
            window_id: String::from(window_id),
            counters: BTreeMap::new(),
        }
    }

    fn data() -> DashboardData {
        let registry = PlayerRegistry::new(vec![PlayerEntry {
            username: String::from("M8 Vanyak3k"),
            epic_id: String::from("79f1994f55eb4931a148935efa188b2f"),
        }]);

        DashboardData::new(
            registry,
            vec![
                record("M8 Vanyak3k", "", ""),
                record(
                    "M8 Vanyak3k",
                    "epicgames_S32_TriosCashCup_NAC",
                    "S32_TriosCashCup_Event6Round1_NAC",
                ),
                record(
                    "M8 Vanyak3k",
                    "epicgames_S32_TriosCashCup_NAC",
                    "S32_TriosCashCup_Event6Round2_NAC",
                ),
            ],
        )
    }

    #[test]
    fn test_tournament_event_ids_are_distinct() {
        let data = data();

        assert_eq!(
            data.tournament_event_ids(),
            vec!["epicgames_S32_TriosCashCup_NAC"]
        );
    }

    #[test]
    fn test_stats_for_filters_by_username() {
        let data = data();

        assert_eq!(data.stats_for("M8 Vanyak3k").count(), 3);
        assert_eq!(data.stats_for("unknown").count(), 0);
    }
}
