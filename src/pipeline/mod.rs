//! Chronological rating ingestion
//!
//! Games flow through the pipeline one at a time: rosters are resolved against
//! the rating store, the calculator produces new ratings, and the results are
//! committed together with the players' win/loss records.

pub mod ingest;

pub use ingest::{IngestOutcome, IngestionPipeline, IngestionReport, SkippedGame};
