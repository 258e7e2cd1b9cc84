//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};

use crate::config::Config;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting terminal UI");

    let mut app = App::new(config.display().clone());

    enable_raw_mode()?;
    let res = run_in_terminal(&mut app);
    let res = settle(res, restore_terminal());

    info!(moves = app.game().len() - 1, "Terminal UI closed");
    res
}

/// Enters the alternate screen and runs the event loop.
///
/// Expects raw mode on. Leaves the terminal as it is on return, error or not.
fn run_in_terminal(app: &mut App) -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    run_app(&mut terminal, app)
}

/// Attempts every restore step even if an earlier one fails.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw?;
    screen?;
    Ok(())
}

/// Combines the session result with the restore result, logging both.
///
/// A session error takes precedence over a restore error.
fn settle(session: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &session {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }
    session.and(restored)
}

/// Draw, wait for a key, apply it; repeat.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
