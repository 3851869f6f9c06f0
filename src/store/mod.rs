use rand::Rng;
use std::ops::RangeInclusive;
use crate::models::Player;

/// Number of players generated at startup
pub const PLAYER_COUNT: usize = 10;

pub const ID_RANGE: RangeInclusive<u32> = 100..=999;
pub const NAME_SUFFIX_RANGE: RangeInclusive<u32> = 100..=999;
pub const SCORE_RANGE: RangeInclusive<u32> = 0..=100;

/// In-memory player collection.
///
/// Built once before the server starts and only read afterwards, so it is
/// shared between handlers behind an `Arc` without any locking.
#[derive(Debug, Clone, Default)]
pub struct PlayerStore {
    players: Vec<Player>,
}

impl PlayerStore {
    /// Generate a fresh store of `PLAYER_COUNT` random players.
    ///
    /// Every field is drawn independently, so ids may repeat.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let players = (0..PLAYER_COUNT)
            .map(|_| Player {
                id: rng.gen_range(ID_RANGE),
                name: format!("Player-{}", rng.gen_range(NAME_SUFFIX_RANGE)),
                score: rng.gen_range(SCORE_RANGE),
            })
            .collect();

        Self { players }
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Players in generation order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players sorted by score, highest first. Ties keep generation order.
    pub fn ranked(&self) -> Vec<Player> {
        let mut ranked = self.players.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// First player in generation order with the given id
    pub fn find_by_id(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn player(id: u32, name: &str, score: u32) -> Player {
        Player { id, name: name.to_string(), score }
    }

    #[test]
    fn generate_produces_player_count_records_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let store = PlayerStore::generate(&mut rng);

        assert_eq!(store.len(), PLAYER_COUNT);
        for p in store.players() {
            assert!(ID_RANGE.contains(&p.id), "id out of range: {}", p.id);
            assert!(SCORE_RANGE.contains(&p.score), "score out of range: {}", p.score);

            let suffix: u32 = p
                .name
                .strip_prefix("Player-")
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(|| panic!("unexpected name {}", p.name));
            assert!(NAME_SUFFIX_RANGE.contains(&suffix));
        }
    }

    #[test]
    fn same_seed_generates_same_players() {
        let first = PlayerStore::generate(&mut StdRng::seed_from_u64(42));
        let second = PlayerStore::generate(&mut StdRng::seed_from_u64(42));

        assert_eq!(first.players(), second.players());
    }

    #[test]
    fn ranked_sorts_by_score_descending() {
        let store = PlayerStore::generate(&mut StdRng::seed_from_u64(1234));
        let ranked = store.ranked();

        assert_eq!(ranked.len(), store.len());
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ranked_keeps_generation_order_on_ties() {
        let store = PlayerStore::from_players(vec![
            player(300, "Player-300", 50),
            player(100, "Player-100", 80),
            player(200, "Player-200", 50),
        ]);

        let ids: Vec<u32> = store.ranked().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![100, 300, 200]);
    }

    #[test]
    fn ranked_leaves_store_untouched() {
        let store = PlayerStore::from_players(vec![
            player(101, "Player-555", 20),
            player(202, "Player-777", 90),
        ]);

        let _ = store.ranked();
        assert_eq!(store.players()[0].id, 101);
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let store = PlayerStore::from_players(vec![
            player(404, "Player-111", 10),
            player(404, "Player-222", 99),
        ]);

        let found = store.find_by_id(404).map(|p| p.name.as_str());
        assert_eq!(found, Some("Player-111"));
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn empty_store() {
        let store = PlayerStore::default();

        assert!(store.is_empty());
        assert!(store.ranked().is_empty());
        assert!(store.find_by_id(100).is_none());
    }
}
