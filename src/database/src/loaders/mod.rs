pub mod players;
pub mod stats;

pub use players::{PlayerEntity, PlayerLoader};
pub use stats::{StatLoader, StatRecordEntity};

use log::debug;

/// Raw deserialized form of the embedded placeholder dataset.
pub struct DatabaseEntity {
    pub players: Vec<PlayerEntity>,
    pub stats: Vec<StatRecordEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DatabaseEntity {
        let players = PlayerLoader::load();
        let stats = StatLoader::load();

        debug!(
            "embedded dataset: {} players, {} stat records",
            players.len(),
            stats.len()
        );

        DatabaseEntity { players, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_loads() {
        let database = DatabaseLoader::load();

        assert_eq!(database.players.len(), 5);
        assert_eq!(database.stats.len(), 3);
    }
}
