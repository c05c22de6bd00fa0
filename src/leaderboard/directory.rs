//! Display names of players and competitors
//!
//! Names only feed logs and rendered tables; ratings are keyed by id.

use crate::types::{Competitor, Participant, PlayerId, TeamId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: HashMap<PlayerId, Participant>,
    teams: HashMap<TeamId, String>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a participant; the latest appearance wins
    pub fn record_participant(&mut self, participant: &Participant) {
        self.players.insert(participant.player_id, participant.clone());
    }

    pub fn record_competitor(&mut self, competitor: &Competitor) {
        self.teams.insert(competitor.id, competitor.name.clone());
    }

    pub fn player_name(&self, player_id: PlayerId) -> String {
        self.players
            .get(&player_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("#{}", player_id))
    }

    /// Name of the team the player last appeared for
    pub fn team_name(&self, player_id: PlayerId) -> String {
        self.players
            .get(&player_id)
            .and_then(|p| self.teams.get(&p.team_id))
            .cloned()
            .unwrap_or_else(|| "-".to_string())
    }
}
