//! League data sources
//!
//! Schedule and match data are decoded into the wire types of [`schema`],
//! fetched through a [`LeagueSource`], and turned into ordered
//! [`GameRecord`](crate::types::GameRecord)s by [`collect_games`].

pub mod collect;
pub mod http;
pub mod provider;
pub mod schema;

pub use collect::{collect_games, CollectedGames, RejectedRecord};
pub use http::CachedHttpSource;
pub use provider::{LeagueSource, StaticLeagueSource};
