//! CLI configuration
//!
//! Resolves log level and run parameters. Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Default values
//!
//! Steps 1 and 2 are merged by clap's `env` attribute; this module turns the
//! result into a validated [`RunConfig`].

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use walk_core::config::{RunConfig, DEFAULT_TRIALS};

/// Environment variable overriding the seed.
pub const SEED_ENV: &str = "RANDOM_WALK_SEED";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "RANDOM_WALK_LOG_LEVEL";

/// Verbosity accepted by `--log-level`, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lower")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Fallback filter used when `RUST_LOG` is not set.
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Build the run configuration for `n_steps`.
///
/// The trial count is always [`DEFAULT_TRIALS`]; only the step count and the
/// seed come from the user.
pub fn build_run_config(n_steps: usize, seed: Option<u64>) -> walk_core::Result<RunConfig> {
    let config = RunConfig::builder()
        .n_steps(n_steps)
        .n_trials(DEFAULT_TRIALS)
        .maybe_seed(seed)
        .build()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use walk_core::config::{DEFAULT_CURVE_POINTS, MAX_STEPS};
    use walk_core::{ConfigError, WalkError};

    #[test]
    fn test_log_level_parsing_ignores_case() {
        assert_eq!(LogLevel::from_str("trace", true).unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG", true).unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn", true).unwrap(), LogLevel::Warn);

        assert!(LogLevel::from_str("verbose", true).is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::default().filter(), LevelFilter::INFO);
        assert_eq!(LogLevel::Error.filter(), LevelFilter::ERROR);
        assert!(LogLevel::Trace
            .filter()
            .to_string()
            .eq_ignore_ascii_case("trace"));
    }

    #[test]
    fn test_build_run_config() {
        let config = build_run_config(300, Some(5)).unwrap();

        assert_eq!(config.n_steps(), 300);
        assert_eq!(config.n_trials(), DEFAULT_TRIALS);
        assert_eq!(config.curve_points(), DEFAULT_CURVE_POINTS);
        assert_eq!(config.seed(), Some(5));
    }

    #[test]
    fn test_build_run_config_without_seed() {
        assert_eq!(build_run_config(0, None).unwrap().seed(), None);
    }

    #[test]
    fn test_build_run_config_rejects_huge_step_count() {
        let err = build_run_config(MAX_STEPS + 1, None).unwrap_err();
        assert_eq!(
            err,
            WalkError::Config(ConfigError::InvalidStepCount(MAX_STEPS + 1))
        );
    }
}
