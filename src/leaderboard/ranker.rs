//! Final ordering of players by conservative rating

use crate::leaderboard::records::{PlayerRecord, PlayerRecords};
use crate::rating::model::{RatingModel, CONSERVATIVE_STD_DEVS};
use crate::rating::storage::RatingStore;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position
    pub rank: usize,
    pub player_id: PlayerId,
    pub conservative_rating: f64,
    pub rating: RatingModel,
    pub record: PlayerRecord,
}

/// Sorts players by `mean - k * std_dev`, highest first
///
/// Equal scores are ordered by ascending player id so the table does not
/// depend on map iteration order.
#[derive(Debug, Clone)]
pub struct LeaderboardRanker {
    std_devs: f64,
}

impl Default for LeaderboardRanker {
    fn default() -> Self {
        Self::new(CONSERVATIVE_STD_DEVS)
    }
}

impl LeaderboardRanker {
    pub fn new(std_devs: f64) -> Self {
        Self { std_devs }
    }

    pub fn rank(&self, store: &RatingStore, records: &PlayerRecords) -> Vec<Standing> {
        let mut rows: Vec<(PlayerId, f64, RatingModel)> = store
            .iter()
            .map(|(player_id, rating)| {
                (player_id, rating.conservative_rating_with(self.std_devs), rating)
            })
            .collect();

        rows.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        });

        rows.into_iter()
            .enumerate()
            .map(|(index, (player_id, conservative_rating, rating))| Standing {
                rank: index + 1,
                player_id,
                conservative_rating,
                rating,
                record: records.get(player_id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::storage::RatingChange;
    use crate::types::GameOutcome;

    fn store_with(ratings: &[(PlayerId, RatingModel)]) -> RatingStore {
        let mut store = RatingStore::new();
        for (player_id, rating) in ratings {
            store.get_or_insert(*player_id, *rating);
        }
        store
    }

    #[test]
    fn test_rank_by_conservative_rating() {
        // 600 - 300 = 300, 500 - 60 = 440, 450 - 30 = 420
        let store = store_with(&[
            (1, RatingModel::new(600.0, 100.0)),
            (2, RatingModel::new(500.0, 20.0)),
            (3, RatingModel::new(450.0, 10.0)),
        ]);
        let mut records = PlayerRecords::new();
        records.record_outcome(GameOutcome::WinA, [2], [3]);

        let standings = LeaderboardRanker::default().rank(&store, &records);
        let order: Vec<PlayerId> = standings.iter().map(|s| s.player_id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(
            standings.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(standings[0].conservative_rating, 440.0);
        assert_eq!(standings[0].record.wins, 1);
        assert_eq!(standings[1].record.losses, 1);
        assert_eq!(standings[2].record, PlayerRecord::default());
    }

    #[test]
    fn test_ties_break_by_player_id() {
        let rating = RatingModel::new(500.0, 100.0);
        let mut store = store_with(&[(9, rating), (4, rating), (7, rating)]);
        store.commit([&RatingChange {
            player_id: 5,
            old_rating: rating,
            new_rating: rating,
        }]);

        let standings = LeaderboardRanker::default().rank(&store, &PlayerRecords::new());
        let order: Vec<PlayerId> = standings.iter().map(|s| s.player_id).collect();
        assert_eq!(order, vec![4, 5, 7, 9]);
    }

    #[test]
    fn test_custom_std_devs() {
        let store = store_with(&[
            (1, RatingModel::new(600.0, 100.0)),
            (2, RatingModel::new(500.0, 20.0)),
        ]);
        let standings = LeaderboardRanker::new(0.0).rank(&store, &PlayerRecords::new());
        assert_eq!(standings[0].player_id, 1);
        assert_eq!(standings[0].conservative_rating, 600.0);
    }
}
