//! Terminal UI for tic-tac-toe with time travel.

mod app;
mod input;
mod ui;

pub use app::{App, Control, Focus};
pub use input::{digit_cell, move_cursor};
pub use ui::{Regions, draw, regions};

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use tracing::{error, info, instrument, warn};

use crate::AppConfig;

/// Run the TUI until the player quits.
///
/// Logs go to the configured file so they never draw over the screen.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting tic-tac-toe TUI");

    let mut guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.initial_order());
    let res = run_app(&mut terminal, &mut app);

    guard.restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Raw mode plus alternate screen, undone on drop.
///
/// Dropping also runs while unwinding, so a panic or an early `?` leaves
/// the terminal usable.
#[derive(Debug)]
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enables raw mode, switches to the alternate screen and captures the mouse.
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Puts the terminal back. Only the first call does anything.
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Draw, wait for input, apply it. Repeats until [`Control::Quit`].
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            draw(f, app);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if app.handle_key(key) == Control::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_runs_once() {
        let mut guard = TerminalGuard { active: true };
        assert!(guard.restore().is_ok());
        assert!(!guard.active);
        // Later calls, including the one from drop, are no-ops.
        assert!(guard.restore().is_ok());
    }

    #[test]
    fn test_inactive_guard_drops_quietly() {
        let guard = TerminalGuard { active: false };
        drop(guard);
    }
}
