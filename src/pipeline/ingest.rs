//! Sequential ingestion of concluded games
//!
//! The pipeline owns the rating store and applies games strictly in the order
//! it receives them. A game whose roster is malformed or whose update is
//! degenerate is skipped and reported; its participants keep their ratings.

use crate::config::RatingConfig;
use crate::error::{RatingError, RatingResult};
use crate::leaderboard::{LeaderboardRanker, PlayerDirectory, PlayerRecords, Standing};
use crate::rating::{GameUpdate, RatingCalculator, RatingStore, TeamBuilder, TrueSkillCalculator};
use crate::types::{GameId, GameOutcome, GameRecord, MatchId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A game that was not applied to the ratings
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedGame {
    pub match_id: MatchId,
    pub game_id: GameId,
    pub reason: RatingError,
}

/// Statistics about an ingestion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestionReport {
    /// Games handed to the pipeline
    pub games_seen: u64,
    /// Games whose ratings were committed
    pub games_rated: u64,
    /// Rated games that ended in a draw
    pub draws: u64,
    /// Games left out, in input order
    pub skipped: Vec<SkippedGame>,
}

/// What happened to a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IngestOutcome {
    Rated(GameUpdate),
    Skipped,
}

/// Applies games to the rating store in chronological order
pub struct IngestionPipeline {
    calculator: Box<dyn RatingCalculator>,
    builder: TeamBuilder,
    store: RatingStore,
    records: PlayerRecords,
    directory: PlayerDirectory,
    report: IngestionReport,
    last_start: Option<DateTime<Utc>>,
}

impl IngestionPipeline {
    /// Create a pipeline with an empty store around `calculator`
    pub fn new(calculator: Box<dyn RatingCalculator>) -> Self {
        let config = calculator.config();
        let builder = TeamBuilder::new(config.team_size, calculator.default_rating());

        Self {
            calculator,
            builder,
            store: RatingStore::new(),
            records: PlayerRecords::new(),
            directory: PlayerDirectory::new(),
            report: IngestionReport::default(),
            last_start: None,
        }
    }

    /// Create a pipeline using the TrueSkill calculator
    pub fn with_config(config: RatingConfig) -> RatingResult<Self> {
        let calculator = TrueSkillCalculator::new(config)?;
        Ok(Self::new(Box::new(calculator)))
    }

    /// Apply every game of `games` in iteration order
    pub fn ingest_all<'a>(&mut self, games: impl IntoIterator<Item = &'a GameRecord>) {
        for game in games {
            self.ingest(game);
        }
        info!(
            "Ingestion finished: {} games seen, {} rated, {} draws, {} skipped",
            self.report.games_seen,
            self.report.games_rated,
            self.report.draws,
            self.report.skipped.len()
        );
    }

    /// Apply one game
    pub fn ingest(&mut self, game: &GameRecord) -> IngestOutcome {
        self.report.games_seen += 1;

        if let Some(last_start) = self.last_start {
            if game.start_time < last_start {
                warn!(
                    "Game {} of match {} starts at {}, before the previous game at {}",
                    game.game_id, game.match_id, game.start_time, last_start
                );
            }
        }
        self.last_start = Some(game.start_time);

        // names are taken only from games whose rosters are accepted
        let update = match self.builder.build(game, &mut self.store) {
            Ok((team_a, team_b)) => {
                self.record_names(game);
                self.calculator.rate(&team_a, &team_b, game.outcome())
            }
            Err(reason) => Err(reason),
        };

        match update {
            Ok(update) => {
                self.log_game(game, &update);
                self.commit(&update);
                IngestOutcome::Rated(update)
            }
            Err(reason) => {
                warn!(
                    "Skipping game {} of match {} ({} vs {}): {}",
                    game.game_id,
                    game.match_id,
                    game.competitor_a.name,
                    game.competitor_b.name,
                    reason
                );
                self.report.skipped.push(SkippedGame {
                    match_id: game.match_id,
                    game_id: game.game_id,
                    reason,
                });
                IngestOutcome::Skipped
            }
        }
    }

    fn record_names(&mut self, game: &GameRecord) {
        self.directory.record_competitor(&game.competitor_a);
        self.directory.record_competitor(&game.competitor_b);
        for participant in game.participants() {
            self.directory.record_participant(participant);
        }
    }

    fn commit(&mut self, update: &GameUpdate) {
        self.store.commit(update.changes());
        self.records.record_outcome(
            update.outcome,
            update.team_a.iter().map(|change| change.player_id),
            update.team_b.iter().map(|change| change.player_id),
        );

        self.report.games_rated += 1;
        if update.outcome == GameOutcome::Draw {
            self.report.draws += 1;
        }
    }

    fn log_game(&self, game: &GameRecord, update: &GameUpdate) {
        let result = match update.outcome.winner() {
            Some(side) => format!("WINNER {}", game.side(side).0.name),
            None => "DRAW".to_string(),
        };
        debug!(
            "{} vs {} [{} to {}] {} (quality {:.3})",
            game.competitor_a.name,
            game.competitor_b.name,
            game.score_a,
            game.score_b,
            result,
            update.match_quality
        );

        for change in update.changes() {
            debug!(
                "  {} {} : {:.2} to {:.2} ({:+.2})",
                self.directory.team_name(change.player_id),
                self.directory.player_name(change.player_id),
                change.old_rating.conservative_rating(),
                change.new_rating.conservative_rating(),
                change.conservative_delta()
            );
        }
    }

    /// Final standings over everything ingested so far
    pub fn leaderboard(&self) -> Vec<Standing> {
        LeaderboardRanker::default().rank(&self.store, &self.records)
    }

    pub fn store(&self) -> &RatingStore {
        &self.store
    }

    pub fn records(&self) -> &PlayerRecords {
        &self.records
    }

    pub fn directory(&self) -> &PlayerDirectory {
        &self.directory
    }

    pub fn report(&self) -> &IngestionReport {
        &self.report
    }
}
