//! Random Walk CLI - 1D symmetric random walk and the Central Limit Theorem
//!
//! Simulates one trajectory and its local time, then many independent walks
//! whose final positions are compared against the Gaussian limit.
//!
//! # Usage
//!
//! - `random-walk` - prompt for N, then show the three figures
//! - `random-walk --steps 1000 --seed 42` - reproducible run without a prompt
//! - `random-walk --steps 1000 --no-display` - simulate and log only

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walk_core::report::simulate;
use walk_core::rng::WalkRng;

mod config;
mod input;

use config::{build_run_config, LogLevel, LOG_LEVEL_ENV, SEED_ENV};
use input::{parse_steps, read_steps};

/// One-dimensional random walk: single path, local time, and final-position
/// distribution against the Gaussian law
#[derive(Parser, Debug)]
#[command(name = "random-walk")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of steps N (prompted for when omitted)
    #[arg(short, long, value_parser = parse_steps, allow_negative_numbers = true)]
    steps: Option<usize>,

    /// Seed for the random source (drawn from OS entropy when omitted)
    #[arg(long, env = SEED_ENV)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        env = LOG_LEVEL_ENV,
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Info
    )]
    log_level: LogLevel,

    /// Simulate without showing the figures
    #[arg(long)]
    no_display: bool,
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.filter().to_string())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level);

    let n_steps = match args.steps {
        Some(n_steps) => n_steps,
        None => {
            let mut stdin = io::stdin().lock();
            let mut stdout = io::stdout();
            read_steps(&mut stdin, &mut stdout).context("Could not obtain the number of steps")?
        }
    };

    let config = build_run_config(n_steps, args.seed)?;
    let mut rng = WalkRng::from_optional_seed(config.seed());

    info!(
        n_steps = config.n_steps(),
        n_trials = config.n_trials(),
        curve_points = config.curve_points(),
        seed = rng.seed(),
        "Run configuration loaded"
    );

    let report = simulate(&config, &mut rng);

    if args.no_display {
        info!("Display disabled; skipping figures");
    } else {
        let shown = walk_tui::show_report(&report).context("Failed to display figures")?;
        if shown == 0 {
            info!("No interactive terminal; figures not shown");
        } else {
            info!(shown, "Figures dismissed");
        }
    }

    info!(seed = report.seed, "Run complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_log_level_any_case() {
        let args = Args::try_parse_from(["random-walk", "--steps", "5", "--log-level", "DEBUG"])
            .unwrap();

        assert_eq!(args.steps, Some(5));
        assert_eq!(args.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_args_reject_unknown_log_level() {
        assert!(Args::try_parse_from(["random-walk", "--log-level", "verbose"]).is_err());
    }

    #[test]
    fn test_args_reject_negative_steps() {
        assert!(Args::try_parse_from(["random-walk", "--steps", "-3"]).is_err());
    }
}
