//! Season fixtures shared by the integration tests

#![allow(dead_code)]

use owl_ratings::source::schema::{
    CompetitorData, GameData, MatchData, MatchDetail, PlayerData, PlayerInfo, PlayerTeamData,
    ScheduleData, ScheduleResponse, StageData, STATE_CONCLUDED,
};
use owl_ratings::source::StaticLeagueSource;
use owl_ratings::types::{GameId, MatchId, PlayerId, TeamId};
use std::path::Path;

pub const TEAM_A: TeamId = 4402;
pub const TEAM_B: TeamId = 4525;

/// Player ids of the six starters of `team`
pub fn lineup(team: TeamId) -> Vec<PlayerId> {
    let base = if team == TEAM_A { 100 } else { 200 };
    (1..=6).map(|n| base + n).collect()
}

pub fn competitors() -> Vec<Option<CompetitorData>> {
    vec![
        Some(CompetitorData {
            id: TEAM_A,
            name: "Boston Uprising".to_string(),
        }),
        Some(CompetitorData {
            id: TEAM_B,
            name: "London Spitfire".to_string(),
        }),
    ]
}

pub fn concluded_match(id: MatchId, start_ms: i64) -> MatchData {
    MatchData {
        id,
        competitors: competitors(),
        start_date_ts: Some(start_ms),
        state: STATE_CONCLUDED.to_string(),
    }
}

pub fn players(team: TeamId, ids: &[PlayerId]) -> Vec<PlayerData> {
    ids.iter()
        .map(|&id| PlayerData {
            team: PlayerTeamData { id: team },
            player: PlayerInfo {
                id,
                name: format!("player{}", id),
                handle: None,
            },
        })
        .collect()
}

/// A concluded game between the two fixed lineups
pub fn game(id: GameId, number: u32, points: [i32; 2]) -> GameData {
    let mut roster = players(TEAM_A, &lineup(TEAM_A));
    roster.extend(players(TEAM_B, &lineup(TEAM_B)));
    GameData {
        id,
        number,
        points: points.to_vec(),
        state: STATE_CONCLUDED.to_string(),
        players: roster,
    }
}

pub fn stage(id: u32, name: &str, matches: Vec<MatchData>) -> StageData {
    StageData {
        id,
        name: name.to_string(),
        matches,
    }
}

/// Team A wins 2-0 and 2-1 in stage 1, then draws 1-1 in stage 2
pub fn three_game_season() -> (Vec<StageData>, Vec<(MatchId, MatchDetail)>) {
    let stages = vec![
        stage(1, "Stage 1", vec![concluded_match(10, 1_515_715_200_000)]),
        stage(2, "Stage 2", vec![concluded_match(20, 1_519_344_000_000)]),
    ];
    let details = vec![
        (
            10,
            MatchDetail {
                games: vec![game(1002, 2, [2, 1]), game(1001, 1, [2, 0])],
            },
        ),
        (
            20,
            MatchDetail {
                games: vec![game(2001, 1, [1, 1])],
            },
        ),
    ];
    (stages, details)
}

pub fn static_source(stages: Vec<StageData>, details: Vec<(MatchId, MatchDetail)>) -> StaticLeagueSource {
    details
        .into_iter()
        .fold(StaticLeagueSource::new(stages), |source, (id, detail)| {
            source.with_match_detail(id, detail)
        })
}

/// Write the season as cached API responses under `dir`
pub fn write_cache(dir: &Path, stages: &[StageData], details: &[(MatchId, MatchDetail)]) {
    let schedule = ScheduleResponse {
        data: ScheduleData {
            stages: stages.to_vec(),
        },
    };
    std::fs::write(
        dir.join("schedule.cache"),
        serde_json::to_string(&schedule).unwrap(),
    )
    .unwrap();

    for (id, detail) in details {
        std::fs::write(
            dir.join(format!("match.{}.cache", id)),
            serde_json::to_string(detail).unwrap(),
        )
        .unwrap();
    }
}
