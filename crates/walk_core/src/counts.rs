//! Position tallies and their normalised distributions.
//!
//! [`PositionCounts`] backs both the single-walk visit histogram (local time)
//! and the tally of final positions across many walks. Keys are kept in
//! ascending order so figures can be drawn left to right without sorting.

use std::collections::BTreeMap;

/// Occurrence count per integer position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionCounts {
    counts: BTreeMap<i64, u64>,
    total: u64,
}

impl PositionCounts {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `position`.
    #[inline]
    pub fn record(&mut self, position: i64) {
        *self.counts.entry(position).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of occurrences of `position` (zero if never seen).
    pub fn get(&self, position: i64) -> u64 {
        self.counts.get(&position).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct positions.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(position, count)` pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts.iter().map(|(&position, &count)| (position, count))
    }

    /// Distinct positions in ascending order.
    pub fn positions(&self) -> Vec<i64> {
        self.counts.keys().copied().collect()
    }

    /// Counts aligned with [`PositionCounts::positions`].
    pub fn counts(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }

    /// Smallest recorded position.
    pub fn min_position(&self) -> Option<i64> {
        self.counts.keys().next().copied()
    }

    /// Largest recorded position.
    pub fn max_position(&self) -> Option<i64> {
        self.counts.keys().next_back().copied()
    }

    /// Largest single count.
    pub fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Divides every count by the total, yielding a probability mapping.
    ///
    /// An empty tally normalises to an empty distribution.
    pub fn normalised(&self) -> Distribution {
        if self.total == 0 {
            return Distribution::default();
        }
        let total = self.total as f64;
        let probabilities = self
            .counts
            .iter()
            .map(|(&position, &count)| (position, count as f64 / total))
            .collect();
        Distribution { probabilities }
    }
}

impl FromIterator<i64> for PositionCounts {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut counts = Self::new();
        for position in iter {
            counts.record(position);
        }
        counts
    }
}

/// Probability per integer position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
    probabilities: BTreeMap<i64, f64>,
}

impl Distribution {
    /// Probability of `position` (zero if never observed).
    pub fn get(&self, position: i64) -> f64 {
        self.probabilities.get(&position).copied().unwrap_or(0.0)
    }

    /// Number of observed positions.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Returns `true` if no position was observed.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Iterates `(position, probability)` pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.probabilities.iter().map(|(&position, &p)| (position, p))
    }

    /// Sum of all probabilities; 1.0 up to rounding for a non-empty tally.
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Largest single probability.
    pub fn max_probability(&self) -> f64 {
        self.probabilities.values().copied().fold(0.0, f64::max)
    }

    /// Smallest observed position.
    pub fn min_position(&self) -> Option<i64> {
        self.probabilities.keys().next().copied()
    }

    /// Largest observed position.
    pub fn max_position(&self) -> Option<i64> {
        self.probabilities.keys().next_back().copied()
    }

    /// `(x, y)` points for charting.
    pub fn to_points(&self) -> Vec<(f64, f64)> {
        self.iter().map(|(x, p)| (x as f64, p)).collect()
    }
}
