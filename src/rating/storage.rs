//! The rating store
//!
//! A single owned map from player to current belief. The ingestion pipeline is
//! its only writer, so no interior locking is needed.

use crate::rating::model::RatingModel;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// New belief for one player, produced by a rating update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: RatingModel,
    pub new_rating: RatingModel,
}

impl RatingChange {
    /// Movement of the conservative rating caused by the update
    pub fn conservative_delta(&self) -> f64 {
        self.new_rating.conservative_rating() - self.old_rating.conservative_rating()
    }
}

/// Current rating of every player seen so far
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingStore {
    ratings: BTreeMap<PlayerId, RatingModel>,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player_id: PlayerId) -> Option<RatingModel> {
        self.ratings.get(&player_id).copied()
    }

    /// Current rating, inserting `default` on first appearance
    pub fn get_or_insert(&mut self, player_id: PlayerId, default: RatingModel) -> RatingModel {
        *self.ratings.entry(player_id).or_insert(default)
    }

    /// Replace the ratings of every player in `changes`
    pub fn commit<'a>(&mut self, changes: impl IntoIterator<Item = &'a RatingChange>) {
        for change in changes {
            self.ratings.insert(change.player_id, change.new_rating);
        }
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// All ratings in player id order
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, RatingModel)> + '_ {
        self.ratings.iter().map(|(id, rating)| (*id, *rating))
    }
}
