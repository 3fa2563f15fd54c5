use serde::Deserialize;

const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

#[derive(Deserialize)]
pub struct PlayerEntity {
    pub username: String,
    pub epic_id: String,
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Vec<PlayerEntity> {
        serde_json::from_str(STATIC_PLAYERS_JSON).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_parse_in_source_order() {
        let players = PlayerLoader::load();

        assert_eq!(players[0].username, "M8 Vanyak3k");
        assert_eq!(players[0].epic_id, "79f1994f55eb4931a148935efa188b2f");
        assert_eq!(players[4].username, "KC Merstach!");
    }

    #[test]
    fn test_epic_ids_are_32_hex_chars() {
        for player in PlayerLoader::load() {
            assert_eq!(player.epic_id.len(), 32);
            assert!(player.epic_id.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
