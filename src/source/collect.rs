//! Turns league schedule data into an ordered stream of game records
//!
//! Matches are filtered and sorted before any detail is fetched. Details are
//! fetched with bounded concurrency but kept in schedule order, so the result
//! is the same no matter how the requests interleave.

use crate::error::{RatingError, Result};
use crate::source::provider::LeagueSource;
use crate::source::schema::{CompetitorData, GameData, MatchData, MatchDetail};
use crate::types::{Competitor, GameId, GameRecord, MatchId, Participant};
use crate::utils::{name_matches, timestamp_from_millis};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// A match or game left out while collecting
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub match_id: MatchId,
    /// `None` when the whole match was rejected
    pub game_id: Option<GameId>,
    pub reason: RatingError,
}

/// Result of collecting a season
#[derive(Debug, Clone, Default)]
pub struct CollectedGames {
    /// Concluded games in chronological order
    pub games: Vec<GameRecord>,
    pub rejected: Vec<RejectedRecord>,
}

/// A concluded match with exactly two competitors, waiting for its games
#[derive(Debug, Clone)]
struct MatchPlan {
    id: MatchId,
    start_time: DateTime<Utc>,
    competitor_a: Competitor,
    competitor_b: Competitor,
}

/// Fetch every concluded game of the selected stages
///
/// # Arguments
/// * `source` - Where schedule and match details come from
/// * `stages` - Stage names to keep (case-insensitive); empty keeps all
/// * `max_concurrent` - Maximum number of match details fetched at once
///
/// # Returns
/// The games ordered by match start time, then match id, then game number.
/// Fetch failures abort the collection.
pub async fn collect_games<S>(source: &S, stages: &[String], max_concurrent: usize) -> Result<CollectedGames>
where
    S: LeagueSource + ?Sized,
{
    let schedule = source.fetch_schedule().await?;
    let mut collected = CollectedGames::default();
    let mut seen = HashSet::new();
    let mut plans = Vec::new();

    for stage in schedule.iter().filter(|stage| name_matches(stages, &stage.name)) {
        debug!("Collecting stage {} ({} matches)", stage.name, stage.matches.len());

        for m in stage.matches.iter().filter(|m| m.is_concluded()) {
            if !seen.insert(m.id) {
                continue;
            }
            match plan_match(m) {
                Ok(plan) => plans.push(plan),
                Err(reason) => {
                    warn!("Skipping match {}: {}", m.id, reason);
                    collected.rejected.push(RejectedRecord {
                        match_id: m.id,
                        game_id: None,
                        reason,
                    });
                }
            }
        }
    }

    plans.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));
    info!("Fetching details of {} concluded matches", plans.len());

    let details: Vec<(MatchPlan, MatchDetail)> = stream::iter(plans)
        .map(|plan| async move {
            let detail = source.fetch_match_detail(plan.id).await?;
            Ok::<_, anyhow::Error>((plan, detail))
        })
        .buffered(max_concurrent.max(1))
        .try_collect()
        .await?;

    for (plan, detail) in details {
        let mut games: Vec<&GameData> = detail.games.iter().filter(|g| g.is_concluded()).collect();
        games.sort_by(|a, b| a.number.cmp(&b.number).then(a.id.cmp(&b.id)));

        for game in games {
            match game_record(&plan, game) {
                Ok(record) => collected.games.push(record),
                Err(reason) => {
                    warn!("Skipping game {} of match {}: {}", game.id, plan.id, reason);
                    collected.rejected.push(RejectedRecord {
                        match_id: plan.id,
                        game_id: Some(game.id),
                        reason,
                    });
                }
            }
        }
    }

    info!(
        "Collected {} games, rejected {} records",
        collected.games.len(),
        collected.rejected.len()
    );
    Ok(collected)
}

fn plan_match(m: &MatchData) -> std::result::Result<MatchPlan, RatingError> {
    let competitors: Vec<&CompetitorData> = m.competitors.iter().flatten().collect();
    let &[a, b] = competitors.as_slice() else {
        return Err(RatingError::CompetitorCountMismatch {
            match_id: m.id,
            count: competitors.len(),
        });
    };

    let start_time = m
        .start_date_ts
        .and_then(timestamp_from_millis)
        .ok_or_else(|| RatingError::MalformedRecord {
            reason: format!("match {} has no valid start time", m.id),
        })?;

    Ok(MatchPlan {
        id: m.id,
        start_time,
        competitor_a: Competitor {
            id: a.id,
            name: a.name.clone(),
        },
        competitor_b: Competitor {
            id: b.id,
            name: b.name.clone(),
        },
    })
}

fn game_record(plan: &MatchPlan, game: &GameData) -> std::result::Result<GameRecord, RatingError> {
    let &[score_a, score_b] = game.points.as_slice() else {
        return Err(RatingError::MalformedRecord {
            reason: format!(
                "game {} of match {} has {} point values, expected 2",
                game.id,
                plan.id,
                game.points.len()
            ),
        });
    };

    let mut roster_a = Vec::new();
    let mut roster_b = Vec::new();
    for p in &game.players {
        let participant = Participant {
            player_id: p.player.id,
            name: p.player.name.clone(),
            team_id: p.team.id,
        };
        if p.team.id == plan.competitor_a.id {
            roster_a.push(participant);
        } else if p.team.id == plan.competitor_b.id {
            roster_b.push(participant);
        } else {
            debug!(
                "Dropping player {} of team {} from game {}",
                p.player.id, p.team.id, game.id
            );
        }
    }

    Ok(GameRecord {
        match_id: plan.id,
        game_id: game.id,
        game_number: game.number,
        start_time: plan.start_time,
        competitor_a: plan.competitor_a.clone(),
        competitor_b: plan.competitor_b.clone(),
        roster_a,
        roster_b,
        score_a,
        score_b,
    })
}
