//! # walk_tui
//!
//! Terminal figures for a random walk run, rendered with ratatui on a
//! crossterm backend.
//!
//! ### Figures
//! - **Path**: position against step index for the single trajectory
//! - **Visits**: visit count per position along that trajectory (local time)
//! - **Final distribution**: empirical final-position probabilities with the
//!   Gaussian reference density overlaid
//!
//! Figures are shown one at a time and block until dismissed. When stdout is
//! not a terminal nothing is drawn and [`show_report`] returns immediately.

pub mod figures;
pub mod viewer;

use anyhow::Result;
use tracing::debug;
use walk_core::report::WalkReport;

use crate::viewer::{display_available, FigureViewer};

/// Show every figure for `report`, returning how many were displayed.
///
/// Returns `Ok(0)` without touching the terminal in a non-interactive
/// context.
pub fn show_report(report: &WalkReport) -> Result<usize> {
    if !display_available() {
        debug!("stdout is not a terminal; skipping figures");
        return Ok(0);
    }

    let mut viewer = FigureViewer::new()?;
    let shown = viewer.show_all(report)?;
    drop(viewer);

    debug!(shown, "Figure viewer closed");
    Ok(shown)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::figures::Figure;
    pub use crate::show_report;
    pub use crate::viewer::{
        action_for_key, display_available, render_figure, FigureViewer, ViewerAction,
    };
}
