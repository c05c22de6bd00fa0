//! Main entry point for the OWL ratings tool
//!
//! Loads the configuration, fetches every concluded game of the season,
//! replays them through the rating pipeline and prints the leaderboard.

use anyhow::Result;
use clap::Parser;
use owl_ratings::config::AppConfig;
use owl_ratings::leaderboard::{render, OutputFormat};
use owl_ratings::pipeline::IngestionPipeline;
use owl_ratings::source::{collect_games, CachedHttpSource, CollectedGames};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// OWL Ratings - TrueSkill leaderboard for league players
#[derive(Parser)]
#[command(
    name = "owl-ratings",
    version,
    about = "Rate league players with TrueSkill and print a leaderboard",
    long_about = "OWL Ratings replays every concluded game of the league schedule in \
                 chronological order, updates each player's TrueSkill rating from the \
                 map results, and ranks players by their conservative rating."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Stage filter
    #[arg(
        short,
        long,
        value_name = "NAME",
        value_delimiter = ',',
        help = "Only rate games of these stages (comma separated, case-insensitive)"
    )]
    stage: Vec<String>,

    /// Output format override
    #[arg(short, long, value_enum, help = "Leaderboard table format")]
    format: Option<OutputFormat>,

    /// Shorthand for the pipe format
    #[arg(long, conflicts_with = "format", help = "Print a pipe-delimited table (same as --format pipe)")]
    reddit: bool,

    /// Offline mode
    #[arg(long, help = "Only use cached responses, never the network")]
    offline: bool,

    /// Cache directory override
    #[arg(long, value_name = "DIR", help = "Directory holding cached API responses")]
    cache_dir: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with the per-game rating trace")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without fetching data")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
///
/// Logs go to stderr so the leaderboard on stdout stays clean.
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display startup banner with run information
fn display_startup_banner(config: &AppConfig) {
    info!("{} {}", config.service.name, owl_ratings::VERSION);
    info!("   Log level: {}", config.service.log_level);
    info!("   Schedule: {}", config.source.schedule_url);
    info!(
        "   Cache: {}{}",
        config.source.cache_dir.display(),
        if config.source.offline { " (offline)" } else { "" }
    );
    info!(
        "   Prior: μ={} σ={} β={} τ={} draw={}",
        config.rating.initial_mean,
        config.rating.initial_std_dev,
        config.rating.beta,
        config.rating.dynamics_factor,
        config.rating.draw_probability
    );
    if config.output.stages.is_empty() {
        info!("   Stages: all");
    } else {
        info!("   Stages: {}", config.output.stages.join(", "));
    }
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if !args.stage.is_empty() {
        config.output.stages = args.stage.clone();
    }

    if let Some(format) = args.format {
        config.output.format = format;
    }

    if args.reddit {
        config.output.format = OutputFormat::Pipe;
    }

    if args.offline {
        config.source.offline = true;
    }

    if let Some(cache_dir) = &args.cache_dir {
        config.source.cache_dir = cache_dir.clone();
    }

    owl_ratings::config::validate_config(&config)?;
    Ok(config)
}

/// Log what was left out of the ratings
fn report_skips(collected: &CollectedGames, pipeline: &IngestionPipeline) {
    let report = pipeline.report();
    info!(
        "Rated {} of {} games ({} draws)",
        report.games_rated, report.games_seen, report.draws
    );

    if collected.rejected.is_empty() && report.skipped.is_empty() {
        return;
    }

    warn!(
        "{} records rejected while collecting, {} games skipped while rating",
        collected.rejected.len(),
        report.skipped.len()
    );
    for rejected in &collected.rejected {
        match rejected.game_id {
            Some(game_id) => warn!("  match {} game {}: {}", rejected.match_id, game_id, rejected.reason),
            None => warn!("  match {}: {}", rejected.match_id, rejected.reason),
        }
    }
    for skipped in &report.skipped {
        warn!("  match {} game {}: {}", skipped.match_id, skipped.game_id, skipped.reason);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    let mut pipeline = match IngestionPipeline::with_config(config.rating.clone()) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Failed to build rating calculator: {}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Dry run completed - exiting without fetching data");
        return Ok(());
    }

    let source = match CachedHttpSource::new(&config.source) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to initialize league source: {}", e);
            std::process::exit(1);
        }
    };

    let collected = match collect_games(
        &source,
        &config.output.stages,
        config.source.max_concurrent_fetches,
    )
    .await
    {
        Ok(collected) => collected,
        Err(e) => {
            error!("Failed to collect games: {:#}", e);
            std::process::exit(1);
        }
    };

    pipeline.ingest_all(&collected.games);
    report_skips(&collected, &pipeline);

    let standings = pipeline.leaderboard();
    print!("{}", render(&standings, pipeline.directory(), config.output.format));

    info!("Finished: {} players ranked", standings.len());
    Ok(())
}
