//! The three random walk figures.
//!
//! - (A) Path of the single trajectory
//! - (B) Visit counts per position along that trajectory (local time)
//! - (C) Final-position distribution over many walks with the Gaussian overlay
//!
//! Each figure is a header carrying the title, a chart with legend and axis
//! names, and a footer. (B) is a `BarChart`; (A) and (C) are line `Chart`s,
//! with (C) drawing every bar as a vertical segment under the curve. Terminal charts have no grid lines, so each
//! axis is labelled at both bounds and at its midpoint instead.

use ratatui::{
    prelude::*,
    symbols,
    widgets::{
        block::{Position, Title},
        Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph,
    },
};
use walk_core::report::WalkReport;

const PATH_COLOR: Color = Color::Blue;
const VISITS_COLOR: Color = Color::Rgb(255, 165, 0);
const EMPIRICAL_COLOR: Color = Color::Rgb(0, 191, 255);
const GAUSSIAN_COLOR: Color = Color::White;

const BAR_GAP: u16 = 1;

/// One of the figures produced for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    /// (A) Single-walk path.
    Path,
    /// (B) Single-walk visit histogram.
    Visits,
    /// (C) Final-position histogram with Gaussian overlay.
    FinalDistribution,
}

impl Figure {
    /// All figures in display order.
    pub const ALL: [Figure; 3] = [Figure::Path, Figure::Visits, Figure::FinalDistribution];

    /// Title lines shown in the figure header.
    pub fn title_lines(&self, n_steps: usize) -> Vec<String> {
        match self {
            Self::Path => vec!["1D Random Walk Path (Single Trajectory)".to_string()],
            Self::Visits => {
                vec!["Histogram: Number of Visits per Position (Single Walk)".to_string()]
            }
            Self::FinalDistribution => vec![
                format!("Distribution of Final Positions after N={} Steps", n_steps),
                "(Random Walk vs. Gaussian)".to_string(),
            ],
        }
    }

    /// Draws the whole figure (header, chart, footer) into `area`.
    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &WalkReport,
        position: (usize, usize),
    ) {
        let titles = self.title_lines(report.n_steps);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(titles.len() as u16 + 2), // Header
                Constraint::Min(0),                          // Chart
                Constraint::Length(3),                       // Footer
            ])
            .split(area);

        draw_header(frame, chunks[0], &titles);

        match self {
            Self::Path => draw_path_chart(frame, chunks[1], report),
            Self::Visits => draw_visits_chart(frame, chunks[1], report),
            Self::FinalDistribution => draw_distribution_chart(frame, chunks[1], report),
        }

        draw_footer(frame, chunks[2], &self.footer_text(report), position);
    }

    /// Run details shown next to the keybindings.
    fn footer_text(&self, report: &WalkReport) -> String {
        match self {
            Self::Path => format!(
                "N={} | final={} | range=[{}, {}] | seed={}",
                report.n_steps,
                report.path.final_position(),
                report.path.min_position(),
                report.path.max_position(),
                report.seed
            ),
            Self::Visits => format!(
                "{} distinct positions | {} visits | seed={}",
                report.visits.len(),
                report.visits.total(),
                report.seed
            ),
            Self::FinalDistribution => match &report.summary {
                Some(s) => format!(
                    "T={} | mean={:.3} (±{:.3} s.e.) | sd={:.3} vs √N={:.3} | seed={}",
                    s.n_trials,
                    s.mean,
                    s.standard_error,
                    s.std_dev,
                    s.theoretical_std_dev,
                    report.seed
                ),
                None => format!("no trials | seed={}", report.seed),
            },
        }
    }
}

/// Draw the title header
fn draw_header(frame: &mut Frame, area: Rect, titles: &[String]) {
    let lines: Vec<Line> = titles.iter().map(|t| Line::from(t.clone())).collect();
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw footer with run details and keybindings
fn draw_footer(frame: &mut Frame, area: Rect, details: &str, position: (usize, usize)) {
    let (index, count) = position;
    let text = format!(
        " Figure {}/{} | {} | [Enter/Space/→]Next [q/Esc]Close ",
        index + 1,
        count,
        details
    );
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// (A) Position against step index as one connected line.
fn draw_path_chart(frame: &mut Frame, area: Rect, report: &WalkReport) {
    let points = report.path.to_points();

    let x_bounds = [0.0, (report.n_steps.max(1)) as f64];
    let y_bounds = padded_bounds(
        report.path.min_position() as f64,
        report.path.max_position() as f64,
        1.0,
    );

    let datasets = vec![Dataset::default()
        .name("Random Walk Path")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(PATH_COLOR))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL))
        .x_axis(axis("Step", x_bounds, 0))
        .y_axis(axis("Position", y_bounds, 0))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

/// (B) One bar per visited position.
fn draw_visits_chart(frame: &mut Frame, area: Rect, report: &WalkReport) {
    let labels: Vec<String> = report.visits.positions().iter().map(i64::to_string).collect();
    let bar_data: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(report.visits.counts())
        .collect();

    let bar_chart = BarChart::default()
        .block(
            Block::default()
                .title(" Visit Count (Local Time) ")
                .title(
                    Title::from(" x: Position | y: Visit Frequency (one walk) ")
                        .position(Position::Bottom),
                )
                .borders(Borders::ALL),
        )
        .bar_width(bar_width(area.width.saturating_sub(2), bar_data.len(), BAR_GAP))
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(VISITS_COLOR))
        .value_style(Style::default().fg(Color::Black).bg(VISITS_COLOR))
        .label_style(Style::default().fg(Color::Gray))
        .data(&bar_data);

    frame.render_widget(bar_chart, area);
}

/// (C) Empirical probability bars overlaid with the Gaussian density.
///
/// Each bar is a vertical two-point line so that bars and curve share the
/// chart's axes; only the first bar carries the legend name.
fn draw_distribution_chart(frame: &mut Frame, area: Rect, report: &WalkReport) {
    let segments: Vec<[(f64, f64); 2]> = report
        .distribution
        .to_points()
        .into_iter()
        .map(|(x, p)| [(x, 0.0), (x, p)])
        .collect();
    let curve = report.gaussian.points();

    let x_bounds = distribution_x_bounds(report);
    let y_max = report
        .distribution
        .max_probability()
        .max(report.gaussian.max_density());
    let y_bounds = [0.0, headroom(y_max)];

    let mut datasets: Vec<Dataset> = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let dataset = Dataset::default()
                .marker(symbols::Marker::HalfBlock)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(EMPIRICAL_COLOR))
                .data(segment);
            if i == 0 {
                dataset.name("Empirical (Many Walks)")
            } else {
                dataset
            }
        })
        .collect();

    if !curve.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Normal (Gaussian) Approx.")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(GAUSSIAN_COLOR))
                .data(curve),
        );
    }

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL))
        .x_axis(axis("Final Position after N steps", x_bounds, 0))
        .y_axis(axis("Probability", y_bounds, 3))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

/// X range of the distribution figure: the observed final positions, one
/// unit of padding either side. The Gaussian curve spans the same range.
pub(crate) fn distribution_x_bounds(report: &WalkReport) -> [f64; 2] {
    padded_bounds(
        report.distribution.min_position().unwrap_or(0) as f64,
        report.distribution.max_position().unwrap_or(0) as f64,
        1.0,
    )
}

/// Widest bar that fits `count` bars separated by `gap` into `width` columns.
pub(crate) fn bar_width(width: u16, count: usize, gap: u16) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    (width.saturating_add(gap) / count).saturating_sub(gap).max(1)
}

/// Axis with a title and labels at both bounds and the midpoint.
fn axis(title: &'static str, bounds: [f64; 2], decimals: usize) -> Axis<'static> {
    Axis::default()
        .title(title)
        .style(Style::default().fg(Color::Gray))
        .bounds(bounds)
        .labels(
            axis_labels(bounds, decimals)
                .into_iter()
                .map(Span::raw)
                .collect(),
        )
}

/// Expands `[min, max]` by `pad` on each side so degenerate ranges still
/// have a visible extent.
pub(crate) fn padded_bounds(min: f64, max: f64, pad: f64) -> [f64; 2] {
    [min - pad, max + pad]
}

/// Upper bound leaving 10% room above the tallest value.
pub(crate) fn headroom(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Label text at the low bound, midpoint and high bound.
pub(crate) fn axis_labels(bounds: [f64; 2], decimals: usize) -> Vec<String> {
    let [lo, hi] = bounds;
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| format!("{:.*}", decimals, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use walk_core::config::RunConfig;
    use walk_core::report::simulate_seeded;

    #[test]
    fn test_title_lines() {
        assert_eq!(
            Figure::Path.title_lines(10),
            vec!["1D Random Walk Path (Single Trajectory)"]
        );
        assert_eq!(
            Figure::Visits.title_lines(10),
            vec!["Histogram: Number of Visits per Position (Single Walk)"]
        );
        assert_eq!(
            Figure::FinalDistribution.title_lines(250),
            vec![
                "Distribution of Final Positions after N=250 Steps",
                "(Random Walk vs. Gaussian)"
            ]
        );
    }

    #[test]
    fn test_display_order() {
        assert_eq!(
            Figure::ALL,
            [Figure::Path, Figure::Visits, Figure::FinalDistribution]
        );
    }

    #[test]
    fn test_padded_bounds() {
        assert_eq!(padded_bounds(0.0, 0.0, 1.0), [-1.0, 1.0]);
        assert_eq!(padded_bounds(-4.0, 6.0, 1.0), [-5.0, 7.0]);
    }

    #[test]
    fn test_headroom() {
        assert_relative_eq!(headroom(10.0), 11.0);
        assert_relative_eq!(headroom(0.0), 1.0);
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(158, 10, 1), 14);
        assert_eq!(bar_width(158, 0, 1), 1);
        assert_eq!(bar_width(20, 100, 1), 1);
        assert_eq!(bar_width(9, 3, 1), 2);
    }

    #[test]
    fn test_distribution_x_bounds_follow_observed_range() {
        let config = RunConfig::builder()
            .n_steps(1000)
            .n_trials(200)
            .seed(3)
            .build()
            .unwrap();
        let report = simulate_seeded(&config);

        let [lo, hi] = distribution_x_bounds(&report);
        let min = report.distribution.min_position().unwrap() as f64;
        let max = report.distribution.max_position().unwrap() as f64;
        assert_relative_eq!(lo, min - 1.0);
        assert_relative_eq!(hi, max + 1.0);

        // Observed spread is far narrower than the theoretical support [-N, N]
        assert!(lo > -1000.0 && hi < 1000.0);

        let curve = report.gaussian.points();
        assert_relative_eq!(curve[0].0, min);
        assert_relative_eq!(curve[curve.len() - 1].0, max);
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(axis_labels([-10.0, 10.0], 0), vec!["-10", "0", "10"]);
        assert_eq!(axis_labels([0.0, 0.05], 3), vec!["0.000", "0.025", "0.050"]);
    }
}
