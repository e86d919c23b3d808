//! Blocking figure viewer.
//!
//! Shows one figure at a time on the alternate screen and waits for a key
//! before moving on, so the figures are seen in order like a sequence of
//! plot windows.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use walk_core::report::WalkReport;

use crate::figures::Figure;

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Dismiss the current figure and show the next one.
    Next,
    /// Dismiss the current figure and skip the rest.
    Close,
}

/// Map a key to a viewer action; other keys are ignored.
pub fn action_for_key(key: KeyCode) -> Option<ViewerAction> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('n') => {
            Some(ViewerAction::Next)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(ViewerAction::Close),
        _ => None,
    }
}

/// Returns `true` when stdout is an interactive terminal.
pub fn display_available() -> bool {
    io::stdout().is_terminal()
}

/// Draws `figure` for `report` onto any ratatui backend.
///
/// `position` is the `(index, count)` pair shown in the footer.
pub fn render_figure<B: Backend>(
    terminal: &mut Terminal<B>,
    figure: Figure,
    report: &WalkReport,
    position: (usize, usize),
) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.size();
        figure.draw(frame, area, report, position);
    })?;
    Ok(())
}

/// Terminal figure viewer owning the alternate screen.
pub struct FigureViewer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl FigureViewer {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    /// Show one figure until a dismiss key is pressed.
    pub fn show(
        &mut self,
        figure: Figure,
        report: &WalkReport,
        position: (usize, usize),
    ) -> Result<ViewerAction> {
        loop {
            // Redraw every tick so resizes are picked up
            render_figure(&mut self.terminal, figure, report, position)?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = action_for_key(key.code) {
                            return Ok(action);
                        }
                    }
                }
            }
        }
    }

    /// Show every figure in order; returns how many were displayed.
    pub fn show_all(&mut self, report: &WalkReport) -> Result<usize> {
        let count = Figure::ALL.len();
        for (index, figure) in Figure::ALL.into_iter().enumerate() {
            if self.show(figure, report, (index, count))? == ViewerAction::Close {
                return Ok(index + 1);
            }
        }
        Ok(count)
    }
}

impl Drop for FigureViewer {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
