//! League data source trait and the in-memory implementation
//!
//! The collector only talks to a `LeagueSource`, so the HTTP client can be
//! swapped for fixed data in tests and offline replays.

use crate::error::{RatingError, Result};
use crate::source::schema::{MatchDetail, StageData};
use crate::types::MatchId;
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for fetching the league schedule and per-match game data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeagueSource: Send + Sync {
    /// All stages of the season with their matches
    async fn fetch_schedule(&self) -> Result<Vec<StageData>>;

    /// Games and participants of one match
    async fn fetch_match_detail(&self, match_id: MatchId) -> Result<MatchDetail>;
}

/// Source serving a fixed schedule from memory
#[derive(Debug, Clone, Default)]
pub struct StaticLeagueSource {
    stages: Vec<StageData>,
    details: HashMap<MatchId, MatchDetail>,
}

impl StaticLeagueSource {
    pub fn new(stages: Vec<StageData>) -> Self {
        Self {
            stages,
            details: HashMap::new(),
        }
    }

    /// Add the detail served for `match_id`
    pub fn with_match_detail(mut self, match_id: MatchId, detail: MatchDetail) -> Self {
        self.details.insert(match_id, detail);
        self
    }
}

#[async_trait]
impl LeagueSource for StaticLeagueSource {
    async fn fetch_schedule(&self) -> Result<Vec<StageData>> {
        Ok(self.stages.clone())
    }

    async fn fetch_match_detail(&self, match_id: MatchId) -> Result<MatchDetail> {
        self.details.get(&match_id).cloned().ok_or_else(|| {
            RatingError::UpstreamFetchFailed {
                resource: format!("match.{}", match_id),
                message: "no detail registered for match".to_string(),
            }
            .into()
        })
    }
}
