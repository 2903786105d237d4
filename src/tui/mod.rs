//! Terminal UI: a board, its history list, and the participant roster.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::{GameState, Settlement};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::AppConfig;

/// Runs an interactive game until the player quits.
///
/// `settlement` is invoked when the player claims a won position.
#[instrument(skip_all)]
pub fn run_tui<S: Settlement>(config: AppConfig, settlement: S) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(GameState::new(), settlement, config);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

fn run_loop<S: Settlement>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == AppAction::Quit {
                return Ok(());
            }
        }
    }
}
