//! Player records, final ranking and table rendering

pub mod directory;
pub mod ranker;
pub mod records;
pub mod render;

pub use directory::PlayerDirectory;
pub use ranker::{LeaderboardRanker, Standing};
pub use records::{PlayerRecord, PlayerRecords};
pub use render::{render, OutputFormat};
