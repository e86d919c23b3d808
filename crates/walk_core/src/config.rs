//! Simulation run configuration.
//!
//! This module provides [`RunConfig`] and its builder. A configuration fixes
//! the number of steps per walk, the number of independent trials used for
//! the final-position study, the resolution of the Gaussian reference curve,
//! and the seed of the random source.

use crate::error::ConfigError;

/// Number of independent walks used for the final-position distribution.
pub const DEFAULT_TRIALS: usize = 5000;

/// Number of points at which the Gaussian reference curve is evaluated.
pub const DEFAULT_CURVE_POINTS: usize = 200;

/// Maximum number of steps per walk.
pub const MAX_STEPS: usize = 1_000_000;

/// Maximum number of independent trials.
pub const MAX_TRIALS: usize = 1_000_000;

/// Minimum number of points for the Gaussian reference curve.
pub const MIN_CURVE_POINTS: usize = 2;

/// Random walk simulation configuration.
///
/// Immutable once built. Use [`RunConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use walk_core::config::{RunConfig, DEFAULT_TRIALS};
///
/// let config = RunConfig::builder()
///     .n_steps(100)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_steps(), 100);
/// assert_eq!(config.n_trials(), DEFAULT_TRIALS);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of ±1 steps per walk.
    n_steps: usize,
    /// Number of independent walks for the distribution study.
    n_trials: usize,
    /// Resolution of the Gaussian reference curve.
    curve_points: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl RunConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Returns the number of steps per walk.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of independent trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the number of Gaussian curve points.
    #[inline]
    pub fn curve_points(&self) -> usize {
        self.curve_points
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_steps` is greater than [`MAX_STEPS`]
    /// - `n_trials` is 0 or greater than [`MAX_TRIALS`]
    /// - `curve_points` is less than [`MIN_CURVE_POINTS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if self.n_trials == 0 || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        if self.curve_points < MIN_CURVE_POINTS {
            return Err(ConfigError::InvalidCurvePoints(self.curve_points));
        }
        Ok(())
    }
}

/// Builder for [`RunConfig`].
///
/// `n_steps` is required; every other field has a default.
#[derive(Clone, Debug)]
pub struct RunConfigBuilder {
    n_steps: Option<usize>,
    n_trials: usize,
    curve_points: usize,
    seed: Option<u64>,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self {
            n_steps: None,
            n_trials: DEFAULT_TRIALS,
            curve_points: DEFAULT_CURVE_POINTS,
            seed: None,
        }
    }
}

impl RunConfigBuilder {
    /// Sets the number of steps per walk. Zero is a valid, degenerate walk.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of independent trials.
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    /// Sets the number of points on the Gaussian reference curve.
    #[inline]
    pub fn curve_points(mut self, curve_points: usize) -> Self {
        self.curve_points = curve_points;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed if one is given, leaving the builder untouched otherwise.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingParameter` if `n_steps` was never set,
    /// or any error from [`RunConfig::validate`].
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let n_steps = self
            .n_steps
            .ok_or(ConfigError::MissingParameter("n_steps"))?;

        let config = RunConfig {
            n_steps,
            n_trials: self.n_trials,
            curve_points: self.curve_points,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
