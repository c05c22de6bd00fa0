//! Main application configuration
//!
//! This module defines the configuration of the ratings run: where league data
//! comes from, the rating model parameters, and how the leaderboard is printed.
//! Values come from defaults, an optional TOML file, and environment overrides.

use crate::config::rating::RatingConfig;
use crate::leaderboard::OutputFormat;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub source: SourceSettings,
    pub rating: RatingConfig,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where schedule and match data are fetched from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// URL of the season schedule
    pub schedule_url: String,
    /// URL of a single match; `{id}` is replaced by the match id
    pub match_url: String,
    /// Directory holding `schedule.cache` and `match.<id>.cache`
    pub cache_dir: PathBuf,
    /// Only read the cache, never the network
    pub offline: bool,
    /// Maximum number of match details fetched at once
    pub max_concurrent_fetches: usize,
    /// Timeout for a single HTTP request in seconds
    pub request_timeout_seconds: u64,
}

/// Leaderboard output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Stage names to include; empty means every stage
    pub stages: Vec<String>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "owl-ratings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            schedule_url: "https://api.overwatchleague.com/schedule".to_string(),
            match_url: "https://api.overwatchleague.com/match/{id}".to_string(),
            cache_dir: PathBuf::from("."),
            offline: false,
            max_concurrent_fetches: 4,
            request_timeout_seconds: 30,
        }
    }
}

impl SourceSettings {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Source settings
        if let Ok(url) = env::var("OWL_SCHEDULE_URL") {
            self.source.schedule_url = url;
        }
        if let Ok(url) = env::var("OWL_MATCH_URL") {
            self.source.match_url = url;
        }
        if let Ok(dir) = env::var("OWL_CACHE_DIR") {
            self.source.cache_dir = PathBuf::from(dir);
        }
        if let Ok(offline) = env::var("OWL_OFFLINE") {
            self.source.offline = offline
                .parse()
                .map_err(|_| anyhow!("Invalid OWL_OFFLINE value: {}", offline))?;
        }
        if let Ok(max_fetches) = env::var("OWL_MAX_CONCURRENT_FETCHES") {
            self.source.max_concurrent_fetches = max_fetches
                .parse()
                .map_err(|_| anyhow!("Invalid OWL_MAX_CONCURRENT_FETCHES value: {}", max_fetches))?;
        }

        // Rating settings; a new prior mean rescales the derived parameters
        if let Ok(mean) = env::var("RATING_INITIAL_MEAN") {
            let initial_mean: f64 = mean
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_INITIAL_MEAN value: {}", mean))?;
            self.rating = RatingConfig {
                draw_probability: self.rating.draw_probability,
                team_size: self.rating.team_size,
                ..RatingConfig::from_initial_mean(initial_mean)
            };
        }
        if let Ok(probability) = env::var("RATING_DRAW_PROBABILITY") {
            self.rating.draw_probability = probability
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_DRAW_PROBABILITY value: {}", probability))?;
        }
        if let Ok(team_size) = env::var("RATING_TEAM_SIZE") {
            self.rating.team_size = team_size
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_TEAM_SIZE value: {}", team_size))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate source settings
    if config.source.schedule_url.is_empty() {
        return Err(anyhow!("Schedule URL cannot be empty"));
    }
    if !config.source.match_url.contains("{id}") {
        return Err(anyhow!(
            "Match URL must contain an {{id}} placeholder: {}",
            config.source.match_url
        ));
    }
    if config.source.max_concurrent_fetches == 0 {
        return Err(anyhow!("Max concurrent fetches must be greater than 0"));
    }
    if config.source.request_timeout_seconds == 0 {
        return Err(anyhow!("Request timeout must be greater than 0"));
    }

    config.rating.validate()?;

    Ok(())
}
