//! # walk_core: One-Dimensional Random Walk Simulation
//!
//! Simulation kernel for the symmetric ±1 random walk and its Central Limit
//! Theorem behaviour:
//! - Seedable random source (`rng`)
//! - Single trajectory and local time (`walk`)
//! - Final positions of many independent walks (`ensemble`)
//! - Position tallies and normalised distributions (`counts`)
//! - Gaussian reference density (`gaussian`)
//! - Run configuration and errors (`config`, `error`)
//! - The whole pipeline in one call (`report`)
//!
//! Rendering lives in `walk_tui`; this crate has no terminal or I/O
//! dependencies.
//!
//! ## Usage Example
//!
//! ```rust
//! use walk_core::prelude::*;
//!
//! let config = RunConfig::builder()
//!     .n_steps(100)
//!     .seed(42)
//!     .build()
//!     .expect("valid configuration");
//!
//! let report = simulate_seeded(&config);
//!
//! assert_eq!(report.path.len(), 101);
//! assert_eq!(report.visits.total(), 101);
//! assert_eq!(report.final_positions.n_trials(), DEFAULT_TRIALS);
//! assert!((report.distribution.total() - 1.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod counts;
pub mod ensemble;
pub mod error;
pub mod gaussian;
pub mod report;
pub mod rng;
pub mod walk;

pub use error::{ConfigError, Result, WalkError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{RunConfig, DEFAULT_CURVE_POINTS, DEFAULT_TRIALS};
    pub use crate::counts::{Distribution, PositionCounts};
    pub use crate::ensemble::{
        possible_final_positions, simulate_final_positions, FinalPositions, SampleSummary,
    };
    pub use crate::error::{ConfigError, WalkError};
    pub use crate::gaussian::{normal_pdf, GaussianCurve};
    pub use crate::report::{simulate, simulate_seeded, WalkReport};
    pub use crate::rng::WalkRng;
    pub use crate::walk::{simulate_path, Path};
}
