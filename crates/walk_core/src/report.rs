//! End-to-end simulation run.
//!
//! [`simulate`] drives the single-walk simulator, the multi-walk simulator and
//! the Gaussian reference model in that order, threading one random source
//! through both simulators, and bundles every data product the figures need.

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::counts::{Distribution, PositionCounts};
use crate::ensemble::{simulate_final_positions, FinalPositions, SampleSummary};
use crate::gaussian::GaussianCurve;
use crate::rng::WalkRng;
use crate::walk::{simulate_path, Path};

/// Every data product of one run.
#[derive(Clone, Debug)]
pub struct WalkReport {
    /// Seed of the random source used for the run.
    pub seed: u64,
    /// Steps per walk.
    pub n_steps: usize,
    /// The single trajectory.
    pub path: Path,
    /// Visits per position along [`WalkReport::path`].
    pub visits: PositionCounts,
    /// Final positions of the independent walks.
    pub final_positions: FinalPositions,
    /// Normalised final-position frequencies.
    pub distribution: Distribution,
    /// CLT reference density over the observed final-position range.
    pub gaussian: GaussianCurve,
    /// Statistics of the final positions.
    pub summary: Option<SampleSummary>,
}

/// Runs the full pipeline for `config`, drawing from `rng`.
///
/// The single walk consumes the first `N` draws; the ensemble continues
/// from there.
///
/// # Examples
///
/// ```rust
/// use walk_core::config::RunConfig;
/// use walk_core::report::simulate;
/// use walk_core::rng::WalkRng;
///
/// let config = RunConfig::builder().n_steps(20).n_trials(100).build().unwrap();
/// let mut rng = WalkRng::from_seed(1);
/// let report = simulate(&config, &mut rng);
///
/// assert_eq!(report.path.len(), 21);
/// assert_eq!(report.final_positions.n_trials(), 100);
/// assert_eq!(report.gaussian.len(), 200);
/// ```
pub fn simulate(config: &RunConfig, rng: &mut WalkRng) -> WalkReport {
    let n_steps = config.n_steps();

    let path = simulate_path(n_steps, rng);
    let visits = path.visit_counts();

    let final_positions = simulate_final_positions(n_steps, config.n_trials(), rng);
    let distribution = final_positions.distribution();
    let summary = final_positions.summary();

    let (x_min, x_max) = match (distribution.min_position(), distribution.max_position()) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => (0, 0),
    };
    let gaussian = GaussianCurve::reference(n_steps, x_min, x_max, config.curve_points());
    debug!(x_min, x_max, points = gaussian.len(), "Sampled Gaussian reference");

    if let Some(summary) = &summary {
        info!(
            n_steps,
            n_trials = summary.n_trials,
            mean = summary.mean,
            std_dev = summary.std_dev,
            expected_std_dev = summary.theoretical_std_dev,
            min = summary.min,
            max = summary.max,
            "Final-position sample"
        );
    }

    WalkReport {
        seed: rng.seed(),
        n_steps,
        path,
        visits,
        final_positions,
        distribution,
        gaussian,
        summary,
    }
}

/// Convenience wrapper that builds the random source from the config seed.
pub fn simulate_seeded(config: &RunConfig) -> WalkReport {
    let mut rng = WalkRng::from_optional_seed(config.seed());
    simulate(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(n_steps: usize, n_trials: usize, seed: u64) -> RunConfig {
        RunConfig::builder()
            .n_steps(n_steps)
            .n_trials(n_trials)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_report_is_consistent() {
        let report = simulate_seeded(&config(50, 400, 9));

        assert_eq!(report.seed, 9);
        assert_eq!(report.n_steps, 50);
        assert_eq!(report.path.len(), 51);
        assert_eq!(report.visits.total(), 51);
        assert_eq!(report.final_positions.n_trials(), 400);
        assert!((report.distribution.total() - 1.0).abs() < 1e-9);

        let first = report.gaussian.points().first().unwrap().0;
        let last = report.gaussian.points().last().unwrap().0;
        assert_eq!(first, report.distribution.min_position().unwrap() as f64);
        assert_eq!(last, report.distribution.max_position().unwrap() as f64);
    }

    #[test]
    fn test_report_reproducible() {
        let a = simulate_seeded(&config(30, 200, 1234));
        let b = simulate_seeded(&config(30, 200, 1234));

        assert_eq!(a.path, b.path);
        assert_eq!(a.final_positions, b.final_positions);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn test_degenerate_zero_steps() {
        let report = simulate_seeded(&config(0, 100, 5));

        assert_eq!(report.path.positions(), &[0]);
        assert_eq!(report.visits.get(0), 1);
        assert_eq!(report.visits.len(), 1);
        assert!(report.final_positions.values().iter().all(|&x| x == 0));
        assert_eq!(report.distribution.get(0), 1.0);
        assert_eq!(report.distribution.len(), 1);
        assert!(report.gaussian.is_empty());
    }

    #[test]
    fn test_single_walk_uses_first_draws() {
        let report = simulate_seeded(&config(40, 10, 77));

        let mut rng = WalkRng::from_seed(77);
        let path = simulate_path(40, &mut rng);
        assert_eq!(report.path, path);
    }
}
