//! Win/loss/draw tallies

use crate::types::{GameOutcome, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cumulative results of one player over the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl PlayerRecord {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Records of every player who took part in a rated game
#[derive(Debug, Clone, Default)]
pub struct PlayerRecords {
    records: HashMap<PlayerId, PlayerRecord>,
}

impl PlayerRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one game for both sides
    pub fn record_outcome(
        &mut self,
        outcome: GameOutcome,
        team_a: impl IntoIterator<Item = PlayerId>,
        team_b: impl IntoIterator<Item = PlayerId>,
    ) {
        match outcome {
            GameOutcome::WinA => {
                self.update(team_a, |record| record.wins += 1);
                self.update(team_b, |record| record.losses += 1);
            }
            GameOutcome::WinB => {
                self.update(team_b, |record| record.wins += 1);
                self.update(team_a, |record| record.losses += 1);
            }
            GameOutcome::Draw => {
                self.update(team_a, |record| record.draws += 1);
                self.update(team_b, |record| record.draws += 1);
            }
        }
    }

    fn update(&mut self, players: impl IntoIterator<Item = PlayerId>, apply: fn(&mut PlayerRecord)) {
        for player_id in players {
            apply(self.records.entry(player_id).or_default());
        }
    }

    /// Record of a player, zero if they have not been rated
    pub fn get(&self, player_id: PlayerId) -> PlayerRecord {
        self.records.get(&player_id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_and_draw() {
        let mut records = PlayerRecords::new();

        records.record_outcome(GameOutcome::WinA, [1, 2], [3, 4]);
        records.record_outcome(GameOutcome::WinB, [1, 2], [3, 4]);
        records.record_outcome(GameOutcome::Draw, [1, 2], [3, 5]);

        assert_eq!(
            records.get(1),
            PlayerRecord {
                wins: 1,
                losses: 1,
                draws: 1
            }
        );
        assert_eq!(records.get(4).games_played(), 2);
        assert_eq!(records.get(5).draws, 1);
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn test_unknown_player_has_empty_record() {
        let records = PlayerRecords::new();
        assert_eq!(records.get(42), PlayerRecord::default());
        assert!(records.is_empty());
    }
}
