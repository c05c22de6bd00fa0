//! Team assembly for a single game
//!
//! Teams are built fresh for every game from the store's current ratings and
//! dropped once the update has been computed.

use crate::error::{RatingError, RatingResult};
use crate::rating::model::RatingModel;
use crate::rating::storage::RatingStore;
use crate::types::{GameRecord, PlayerId, Side, TeamId};
use std::collections::HashSet;

/// One side of a game: each fielded player with their current rating
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    team_id: TeamId,
    members: Vec<(PlayerId, RatingModel)>,
}

impl Team {
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            members: Vec::new(),
        }
    }

    /// Build a team from (player, rating) pairs
    pub fn with_members(team_id: TeamId, members: Vec<(PlayerId, RatingModel)>) -> Self {
        Self { team_id, members }
    }

    pub fn add_player(&mut self, player_id: PlayerId, rating: RatingModel) {
        self.members.push((player_id, rating));
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[(PlayerId, RatingModel)] {
        &self.members
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.members.iter().map(|(id, _)| *id)
    }

    pub fn ratings(&self) -> impl Iterator<Item = RatingModel> + '_ {
        self.members.iter().map(|(_, rating)| *rating)
    }
}

/// Assembles both teams of a game with a fixed roster size
#[derive(Debug, Clone)]
pub struct TeamBuilder {
    team_size: usize,
    prior: RatingModel,
}

impl TeamBuilder {
    pub fn new(team_size: usize, prior: RatingModel) -> Self {
        Self { team_size, prior }
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    /// Build Team A and Team B for `game`
    ///
    /// Both rosters are checked before the store is touched, so a mismatched
    /// game leaves no trace. Every player may appear only once across the two
    /// sides. Players seen for the first time receive the prior.
    pub fn build(&self, game: &GameRecord, store: &mut RatingStore) -> RatingResult<(Team, Team)> {
        for side in [Side::A, Side::B] {
            let (competitor, roster) = game.side(side);
            if roster.len() != self.team_size {
                return Err(RatingError::RosterSizeMismatch {
                    game_id: game.game_id,
                    team_id: competitor.id,
                    expected: self.team_size,
                    actual: roster.len(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(2 * self.team_size);
        if let Some(duplicate) = game.participants().find(|p| !seen.insert(p.player_id)) {
            return Err(RatingError::DuplicatePlayer {
                game_id: game.game_id,
                player_id: duplicate.player_id,
            });
        }

        let team_a = self.assemble(game, Side::A, store);
        let team_b = self.assemble(game, Side::B, store);
        Ok((team_a, team_b))
    }

    fn assemble(&self, game: &GameRecord, side: Side, store: &mut RatingStore) -> Team {
        let (competitor, roster) = game.side(side);
        let mut team = Team::new(competitor.id);
        for participant in roster {
            let rating = store.get_or_insert(participant.player_id, self.prior);
            team.add_player(participant.player_id, rating);
        }
        team
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Competitor, Participant};
    use chrono::{TimeZone, Utc};

    fn roster(team_id: TeamId, first_player: PlayerId, size: u32) -> Vec<Participant> {
        (0..size)
            .map(|i| Participant {
                player_id: first_player + i,
                name: format!("player{}", first_player + i),
                team_id,
            })
            .collect()
    }

    fn game(size_a: u32, size_b: u32) -> GameRecord {
        GameRecord {
            match_id: 1,
            game_id: 11,
            game_number: 1,
            start_time: Utc.timestamp_millis_opt(1_500_000_000_000).unwrap(),
            competitor_a: Competitor {
                id: 100,
                name: "Alpha".to_string(),
            },
            competitor_b: Competitor {
                id: 200,
                name: "Bravo".to_string(),
            },
            roster_a: roster(100, 1, size_a),
            roster_b: roster(200, 101, size_b),
            score_a: 2,
            score_b: 0,
        }
    }

    #[test]
    fn test_build_inserts_prior_for_new_players() {
        let prior = RatingModel::new(500.0, 166.0);
        let builder = TeamBuilder::new(6, prior);
        let mut store = RatingStore::new();

        let known = RatingModel::new(600.0, 50.0);
        store.get_or_insert(3, known);

        let (team_a, team_b) = builder.build(&game(6, 6), &mut store).unwrap();
        assert_eq!(team_a.len(), 6);
        assert_eq!(team_b.len(), 6);
        assert_eq!(team_a.team_id(), 100);
        assert_eq!(team_b.team_id(), 200);
        assert_eq!(store.len(), 12);

        assert_eq!(team_a.members()[2], (3, known));
        assert_eq!(team_a.members()[0], (1, prior));
        assert_eq!(team_b.player_ids().collect::<Vec<_>>(), (101..107).collect::<Vec<_>>());
    }

    #[test]
    fn test_roster_mismatch_leaves_store_untouched() {
        let builder = TeamBuilder::new(6, RatingModel::new(500.0, 166.0));
        let mut store = RatingStore::new();

        let err = builder.build(&game(6, 5), &mut store).unwrap_err();
        assert_eq!(
            err,
            RatingError::RosterSizeMismatch {
                game_id: 11,
                team_id: 200,
                expected: 6,
                actual: 5,
            }
        );
        assert!(store.is_empty());

        let err = builder.build(&game(7, 6), &mut store).unwrap_err();
        assert!(matches!(
            err,
            RatingError::RosterSizeMismatch { team_id: 100, actual: 7, .. }
        ));
    }

    #[test]
    fn test_duplicate_players_are_rejected() {
        let builder = TeamBuilder::new(6, RatingModel::new(500.0, 166.0));
        let mut store = RatingStore::new();

        // player 1 fields for both sides
        let mut across = game(6, 6);
        across.roster_b[5].player_id = 1;
        assert_eq!(
            builder.build(&across, &mut store).unwrap_err(),
            RatingError::DuplicatePlayer {
                game_id: 11,
                player_id: 1,
            }
        );
        assert!(store.is_empty());

        // six entries but only five distinct players
        let mut within = game(6, 6);
        within.roster_a[4].player_id = 2;
        assert!(matches!(
            builder.build(&within, &mut store),
            Err(RatingError::DuplicatePlayer { player_id: 2, .. })
        ));
        assert!(store.is_empty());
    }
}
