//! Gaussian reference model.
//!
//! The sum of `N` independent ±1 steps has mean 0 and variance `N`, so the
//! CLT limit of the final-position law is the normal density with standard
//! deviation `√N`. The curve is sampled over the observed range of final
//! positions for overlay on the empirical histogram.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Normal probability density function.
///
/// φ(x; μ, σ) = 1 / (σ √(2π)) · exp(-(x - μ)² / (2σ²))
///
/// `std_dev` must be positive.
///
/// # Examples
///
/// ```
/// use walk_core::gaussian::normal_pdf;
///
/// // N = 100 steps: σ = 10, φ(0) = 1 / √(200π)
/// let density = normal_pdf(0.0_f64, 0.0, 10.0);
/// assert!((density - 0.0398942280).abs() < 1e-9);
/// ```
#[inline]
pub fn normal_pdf<T: Float>(x: T, mean: T, std_dev: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap_or_else(T::nan);
    let half = T::from(0.5).unwrap_or_else(T::nan);

    let z = (x - mean) / std_dev;
    frac_1_sqrt_2pi / std_dev * (-half * z * z).exp()
}

/// `n_points` evenly spaced values from `start` to `stop`, both included.
///
/// A single point yields `[start]`; zero points yield an empty vector.
pub fn linspace(start: f64, stop: f64, n_points: usize) -> Vec<f64> {
    match n_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n_points - 1) as f64;
            (0..n_points)
                .map(|i| {
                    if i == n_points - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Normal density sampled on a grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GaussianCurve {
    mean: f64,
    std_dev: f64,
    points: Vec<(f64, f64)>,
}

impl GaussianCurve {
    /// Samples the CLT reference density for `n_steps`-step walks at
    /// `n_points` evenly spaced points over `[x_min, x_max]`.
    ///
    /// For `n_steps == 0` the limit law is a point mass, which has no
    /// density; the returned curve is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk_core::gaussian::GaussianCurve;
    ///
    /// let curve = GaussianCurve::reference(100, -30, 30, 200);
    /// assert_eq!(curve.len(), 200);
    /// assert_eq!(curve.points()[0].0, -30.0);
    /// assert_eq!(curve.points()[199].0, 30.0);
    /// ```
    pub fn reference(n_steps: usize, x_min: i64, x_max: i64, n_points: usize) -> Self {
        let mean = 0.0;
        let std_dev = (n_steps as f64).sqrt();

        if n_steps == 0 {
            return Self {
                mean,
                std_dev,
                points: Vec::new(),
            };
        }

        let points = linspace(x_min as f64, x_max as f64, n_points)
            .into_iter()
            .map(|x| (x, normal_pdf(x, mean, std_dev)))
            .collect();

        Self {
            mean,
            std_dev,
            points,
        }
    }

    /// Mean of the density.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the density.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// `(x, density)` pairs in ascending `x`.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` for the degenerate `N = 0` curve.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest sampled density.
    pub fn max_density(&self) -> f64 {
        self.points.iter().map(|&(_, y)| y).fold(0.0, f64::max)
    }

    /// Trapezoidal integral of the sampled density.
    pub fn integrate(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| 0.5 * (w[1].0 - w[0].0) * (w[0].1 + w[1].1))
            .sum()
    }
}
