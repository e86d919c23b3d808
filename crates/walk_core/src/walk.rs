//! Single-walk simulator.
//!
//! A walk of `N` steps starts at the origin and moves ±1 at every step, so its
//! path holds `N + 1` positions. The visit histogram (local time) counts how
//! often each position occurs along that path.

use tracing::debug;

use crate::counts::PositionCounts;
use crate::rng::WalkRng;

/// Positions of one random walk, origin included.
///
/// Invariants: `positions[0] == 0` and adjacent positions differ by exactly 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    positions: Vec<i64>,
}

impl Path {
    /// Builds a path from a step sequence by prefix summation.
    ///
    /// Steps must be ±1; the path always starts at 0.
    pub(crate) fn from_steps(steps: &[i64]) -> Self {
        debug_assert!(steps.iter().all(|s| s.abs() == 1), "steps must be ±1");

        let mut positions = Vec::with_capacity(steps.len() + 1);
        positions.push(0);
        let mut position = 0_i64;
        for &step in steps {
            position += step;
            positions.push(position);
        }
        Self { positions }
    }

    /// All positions, index `i` being the position after `i` steps.
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    /// Number of positions (`N + 1`).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A path always contains at least the origin.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of steps taken (`N`).
    pub fn n_steps(&self) -> usize {
        self.positions.len() - 1
    }

    /// Position after the last step.
    pub fn final_position(&self) -> i64 {
        self.positions.last().copied().unwrap_or(0)
    }

    /// Step increments recovered from adjacent positions.
    pub fn steps(&self) -> Vec<i64> {
        self.positions.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Lowest position reached.
    pub fn min_position(&self) -> i64 {
        self.positions.iter().copied().min().unwrap_or(0)
    }

    /// Highest position reached.
    pub fn max_position(&self) -> i64 {
        self.positions.iter().copied().max().unwrap_or(0)
    }

    /// Tabulates visits per position over the whole path.
    ///
    /// The total count equals [`Path::len`].
    pub fn visit_counts(&self) -> PositionCounts {
        self.positions.iter().copied().collect()
    }

    /// `(step index, position)` points for charting.
    pub fn to_points(&self) -> Vec<(f64, f64)> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &x)| (i as f64, x as f64))
            .collect()
    }
}

/// Simulates one walk of `n_steps` steps.
///
/// # Examples
///
/// ```rust
/// use walk_core::rng::WalkRng;
/// use walk_core::walk::simulate_path;
///
/// let mut rng = WalkRng::from_seed(42);
/// let path = simulate_path(10, &mut rng);
///
/// assert_eq!(path.len(), 11);
/// assert_eq!(path.positions()[0], 0);
/// assert_eq!(path.visit_counts().total(), 11);
/// ```
pub fn simulate_path(n_steps: usize, rng: &mut WalkRng) -> Path {
    let mut steps = vec![0_i64; n_steps];
    rng.fill_steps(&mut steps);
    let path = Path::from_steps(&steps);

    debug!(
        n_steps,
        final_position = path.final_position(),
        min = path.min_position(),
        max = path.max_position(),
        "Simulated single walk"
    );

    path
}
