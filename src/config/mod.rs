//! Configuration management for the ratings run
//!
//! This module handles configuration loading from files and environment
//! variables, validation, and the default league parameters.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, OutputSettings, ServiceSettings, SourceSettings};
pub use rating::{RatingConfig, DEFAULT_TEAM_SIZE};
