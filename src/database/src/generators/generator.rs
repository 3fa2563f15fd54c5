use crate::DatabaseEntity;
use fortnite_core::{DashboardData, PlayerEntry, PlayerRegistry, StatRecord};

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> DashboardData {
        let registry = PlayerRegistry::new(
            data.players
                .iter()
                .map(|player| PlayerEntry {
                    username: player.username.clone(),
                    epic_id: player.epic_id.clone(),
                })
                .collect(),
        );

        let stats = data
            .stats
            .iter()
            .map(|record| StatRecord {
                epic_id: record.epic_id.clone(),
                epic_username: record.epic_username.clone(),
                event_id: record.event_id.clone(),
                window_id: record.window_id.clone(),
                counters: record.counters.clone(),
            })
            .collect();

        DashboardData::new(registry, stats)
    }
}
