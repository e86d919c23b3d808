//! Multi-walk simulator.
//!
//! Runs many independent walks of the same length and keeps only where each
//! one ends. By the Central Limit Theorem the final positions of `N`-step
//! walks are approximately normal with mean 0 and standard deviation `√N`.

use tracing::debug;

use crate::counts::{Distribution, PositionCounts};
use crate::rng::WalkRng;

/// Final positions of independent walks sharing one step count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalPositions {
    n_steps: usize,
    values: Vec<i64>,
}

impl FinalPositions {
    /// Wraps already-simulated final positions of `n_steps`-step walks.
    pub fn new(n_steps: usize, values: Vec<i64>) -> Self {
        Self { n_steps, values }
    }

    /// Number of steps of each walk.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of trials.
    pub fn n_trials(&self) -> usize {
        self.values.len()
    }

    /// Final positions in trial order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Frequency of each final position.
    pub fn counts(&self) -> PositionCounts {
        self.values.iter().copied().collect()
    }

    /// Empirical probability of each final position.
    pub fn distribution(&self) -> Distribution {
        self.counts().normalised()
    }

    /// Descriptive statistics, `None` when there are no trials.
    pub fn summary(&self) -> Option<SampleSummary> {
        SampleSummary::from_sample(self.n_steps, &self.values)
    }
}

/// Descriptive statistics of a final-position sample next to the values the
/// CLT predicts for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleSummary {
    /// Number of trials.
    pub n_trials: usize,
    /// Empirical mean.
    pub mean: f64,
    /// Empirical (population) standard deviation.
    pub std_dev: f64,
    /// Smallest final position.
    pub min: i64,
    /// Largest final position.
    pub max: i64,
    /// Theoretical standard deviation, `√N`.
    pub theoretical_std_dev: f64,
    /// Standard error of the mean under the theoretical law, `√N / √T`.
    pub standard_error: f64,
}

impl SampleSummary {
    /// Computes the summary of `values`, final positions of `n_steps`-step
    /// walks. Returns `None` for an empty sample.
    pub fn from_sample(n_steps: usize, values: &[i64]) -> Option<Self> {
        let min = values.iter().copied().min()?;
        let max = values.iter().copied().max()?;

        let n = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        let theoretical_std_dev = (n_steps as f64).sqrt();

        Some(Self {
            n_trials: values.len(),
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            theoretical_std_dev,
            standard_error: theoretical_std_dev / n.sqrt(),
        })
    }

    /// Mean distance from 0 in units of the standard error.
    ///
    /// Zero when the standard error is zero (`N = 0`).
    pub fn mean_z_score(&self) -> f64 {
        if self.standard_error > 0.0 {
            self.mean / self.standard_error
        } else {
            0.0
        }
    }
}

/// Simulates `n_trials` independent walks of `n_steps` steps and keeps only
/// their final positions.
///
/// # Examples
///
/// ```rust
/// use walk_core::ensemble::simulate_final_positions;
/// use walk_core::rng::WalkRng;
///
/// let mut rng = WalkRng::from_seed(42);
/// let finals = simulate_final_positions(4, 1000, &mut rng);
///
/// assert_eq!(finals.n_trials(), 1000);
/// assert!(finals.values().iter().all(|&x| [-4, -2, 0, 2, 4].contains(&x)));
/// ```
pub fn simulate_final_positions(
    n_steps: usize,
    n_trials: usize,
    rng: &mut WalkRng,
) -> FinalPositions {
    let values: Vec<i64> = (0..n_trials).map(|_| rng.sum_steps(n_steps)).collect();

    debug!(n_steps, n_trials, "Simulated final positions");

    FinalPositions::new(n_steps, values)
}

/// Every position an `n_steps`-step walk can end on: the integers in
/// `[-N, N]` sharing the parity of `N`, ascending.
pub fn possible_final_positions(n_steps: usize) -> Vec<i64> {
    let n = n_steps as i64;
    (0..=n).map(|k| 2 * k - n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_possible_final_positions() {
        assert_eq!(possible_final_positions(0), vec![0]);
        assert_eq!(possible_final_positions(1), vec![-1, 1]);
        assert_eq!(possible_final_positions(4), vec![-4, -2, 0, 2, 4]);
    }

    #[test]
    fn test_four_steps_support() {
        let mut rng = WalkRng::from_seed(3);
        let finals = simulate_final_positions(4, 5000, &mut rng);
        let support = possible_final_positions(4);

        for &x in finals.values() {
            assert!(support.contains(&x), "{} not reachable in 4 steps", x);
        }
    }

    #[test]
    fn test_zero_steps_all_zero() {
        let mut rng = WalkRng::from_seed(3);
        let finals = simulate_final_positions(0, 250, &mut rng);

        assert!(finals.values().iter().all(|&x| x == 0));

        let dist = finals.distribution();
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.get(0), 1.0);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let mut rng = WalkRng::from_seed(11);
        let finals = simulate_final_positions(25, 5000, &mut rng);
        let dist = finals.distribution();

        assert_relative_eq!(dist.total(), 1.0, epsilon = 1e-9);
        assert_eq!(finals.counts().total(), 5000);
    }

    #[test]
    fn test_summary_of_known_sample() {
        let summary = SampleSummary::from_sample(4, &[-2, 0, 2, 4]).unwrap();

        assert_eq!(summary.n_trials, 4);
        assert_relative_eq!(summary.mean, 1.0);
        assert_relative_eq!(summary.std_dev, 5.0_f64.sqrt());
        assert_eq!(summary.min, -2);
        assert_eq!(summary.max, 4);
        assert_relative_eq!(summary.theoretical_std_dev, 2.0);
        assert_relative_eq!(summary.standard_error, 1.0);
        assert_relative_eq!(summary.mean_z_score(), 1.0);
    }

    #[test]
    fn test_summary_empty() {
        assert!(SampleSummary::from_sample(10, &[]).is_none());
    }

    #[test]
    fn test_summary_zero_steps() {
        let summary = SampleSummary::from_sample(0, &[0, 0, 0]).unwrap();

        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.standard_error, 0.0);
        assert_eq!(summary.mean_z_score(), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_final_positions_parity_and_range(
            n_steps in 1usize..200,
            n_trials in 1usize..300,
            seed in any::<u64>()
        ) {
            let mut rng = WalkRng::from_seed(seed);
            let finals = simulate_final_positions(n_steps, n_trials, &mut rng);
            let n = n_steps as i64;

            prop_assert_eq!(finals.n_trials(), n_trials);
            for &x in finals.values() {
                prop_assert!((-n..=n).contains(&x));
                prop_assert_eq!((x - n).rem_euclid(2), 0);
            }
        }

        #[test]
        fn test_distribution_normalised(
            n_steps in 0usize..100,
            n_trials in 1usize..500,
            seed in any::<u64>()
        ) {
            let mut rng = WalkRng::from_seed(seed);
            let dist = simulate_final_positions(n_steps, n_trials, &mut rng).distribution();

            prop_assert!((dist.total() - 1.0).abs() < 1e-9);
        }
    }
}
