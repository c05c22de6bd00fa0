//! Wire types of the league schedule API
//!
//! Only the fields the ratings need are decoded; anything else in the payload
//! is ignored. Collections that may be absent default to empty.

use crate::types::{GameId, MatchId, PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// State of a match or game that has a final result
pub const STATE_CONCLUDED: &str = "CONCLUDED";

/// Body of `GET /schedule`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub data: ScheduleData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleData {
    #[serde(default)]
    pub stages: Vec<StageData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageData {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub matches: Vec<MatchData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
    pub id: MatchId,
    /// Slots for the two competitors; unannounced slots are `null`
    #[serde(default)]
    pub competitors: Vec<Option<CompetitorData>>,
    /// Scheduled start in milliseconds since the epoch
    #[serde(default, rename = "startDateTS")]
    pub start_date_ts: Option<i64>,
    #[serde(default)]
    pub state: String,
}

impl MatchData {
    pub fn is_concluded(&self) -> bool {
        self.state == STATE_CONCLUDED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorData {
    pub id: TeamId,
    #[serde(default)]
    pub name: String,
}

/// Body of `GET /match/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    #[serde(default)]
    pub games: Vec<GameData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub id: GameId,
    #[serde(default)]
    pub number: u32,
    /// Map points of the two competitors, in competitor order
    #[serde(default)]
    pub points: Vec<i32>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub players: Vec<PlayerData>,
}

impl GameData {
    pub fn is_concluded(&self) -> bool {
        self.state == STATE_CONCLUDED
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    pub team: PlayerTeamData,
    pub player: PlayerInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTeamData {
    pub id: TeamId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub handle: Option<String>,
}
