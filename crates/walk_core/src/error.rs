//! Error types for the random walk simulators.
//!
//! Configuration problems are detected when a [`RunConfig`](crate::config::RunConfig)
//! is built; nothing in the simulators themselves can fail once a valid
//! configuration exists.

use thiserror::Error;

use crate::config::{MAX_STEPS, MAX_TRIALS, MIN_CURVE_POINTS};

/// Configuration error for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Step count above [`MAX_STEPS`].
    #[error("Invalid step count {0}: must be in range [0, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Trial count outside [1, [`MAX_TRIALS`]].
    #[error("Invalid trial count {0}: must be in range [1, {max}]", max = MAX_TRIALS)]
    InvalidTrialCount(usize),

    /// Fewer than [`MIN_CURVE_POINTS`] points requested for the Gaussian curve.
    #[error(
        "Invalid curve point count {0}: at least {min} points are required",
        min = MIN_CURVE_POINTS
    )]
    InvalidCurvePoints(usize),

    /// Required builder field left unset.
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),
}

/// Top-level error for the simulation kernel.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used across `walk_core`.
pub type Result<T> = std::result::Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidStepCount(2_000_000);
        assert_eq!(
            err.to_string(),
            "Invalid step count 2000000: must be in range [0, 1000000]"
        );

        let err = ConfigError::InvalidTrialCount(0);
        assert_eq!(
            err.to_string(),
            "Invalid trial count 0: must be in range [1, 1000000]"
        );

        let err = ConfigError::InvalidCurvePoints(1);
        assert_eq!(
            err.to_string(),
            "Invalid curve point count 1: at least 2 points are required"
        );

        let err = ConfigError::MissingParameter("n_steps");
        assert!(err.to_string().contains("n_steps"));
    }

    #[test]
    fn test_walk_error_from_config_error() {
        let err: WalkError = ConfigError::InvalidTrialCount(0).into();
        assert_eq!(err, WalkError::Config(ConfigError::InvalidTrialCount(0)));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
