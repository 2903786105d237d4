//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::widgets::ListState;
use rewind_tictactoe::{GameState, Position, Settled, Settlement};
use tracing::{debug, info, instrument};

use super::input::{digit_to_index, move_cursor};
use crate::config::AppConfig;

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move through the history list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App<S> {
    game: Settled<S>,
    config: AppConfig,
    cursor: Position,
    focus: Focus,
    history_state: ListState,
    message: Option<String>,
}

impl<S: Settlement> App<S> {
    /// Creates an application around `game`.
    #[instrument(skip_all)]
    pub fn new(game: GameState, settlement: S, config: AppConfig) -> Self {
        let mut history_state = ListState::default();
        history_state.select(Some(game.current_move()));
        Self {
            game: Settled::new(game, settlement),
            config,
            cursor: Position::Center,
            focus: Focus::default(),
            history_state,
            message: None,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("Quitting");
                return AppAction::Quit;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_history_selection();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.claim(),
            KeyCode::Char('[') => {
                let previous = self.game.game().current_move().saturating_sub(1);
                self.jump(previous);
            }
            KeyCode::Char(']') => {
                let next = self.game.game().current_move() + 1;
                self.jump(next);
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        if let Some(index) = digit_to_index(code) {
            if let Some(pos) = Position::from_index(index) {
                self.cursor = pos;
            }
            self.play(index);
            return;
        }
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.game().history().len() - 1;
        let selected = self.history_state.selected().unwrap_or(0);
        match code {
            KeyCode::Up => self.history_state.select(Some(selected.saturating_sub(1))),
            KeyCode::Down => self.history_state.select(Some((selected + 1).min(last))),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(selected),
            _ => {}
        }
    }

    fn play(&mut self, index: usize) {
        debug!(index, "Forwarding move");
        self.message = None;
        self.game.apply_move(index);
        self.sync_history_selection();
    }

    fn jump(&mut self, move_number: usize) {
        debug!(move_number, "Forwarding jump");
        self.message = None;
        self.game.jump_to(move_number);
        self.sync_history_selection();
    }

    fn claim(&mut self) {
        let winner = self.game.current_view().win().map(|w| w.mark());
        if self.game.claim() {
            if let Some(mark) = winner {
                let participant = self.config.participant(mark);
                self.message = Some(format!(
                    "Claim submitted for {} ({})",
                    participant.name(),
                    participant.public_id_or_placeholder()
                ));
            }
        }
    }

    fn sync_history_selection(&mut self) {
        self.history_state
            .select(Some(self.game.game().current_move()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rewind_tictactoe::{Mark, NoSettlement, Square};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App<NoSettlement> {
        App::new(GameState::new(), NoSettlement, AppConfig::default())
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.game().game().board().get(Position::TopCenter),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_digits_play_and_move_cursor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(*app.cursor(), Position::BottomRight);
        assert_eq!(app.game().game().current_move(), 1);
        assert_eq!(app.history_state().selected(), Some(1));
    }

    #[test]
    fn test_history_focus_jumps() {
        let mut app = app();
        for c in ['1', '5', '2'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(*app.focus(), Focus::History);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.game().game().current_move(), 1);
        assert_eq!(app.game().game().history().len(), 4);
    }

    #[test]
    fn test_brackets_step_through_history() {
        let mut app = app();
        for c in ['1', '5'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Char('[')));
        assert_eq!(app.game().game().current_move(), 1);
        app.handle_key(key(KeyCode::Char(']')));
        app.handle_key(key(KeyCode::Char(']')));
        assert_eq!(app.game().game().current_move(), 2);
    }

    #[test]
    fn test_claim_only_after_win() {
        let mut claims = 0;
        {
            let mut app = App::new(GameState::new(), || claims += 1, AppConfig::default());
            app.handle_key(key(KeyCode::Char('c')));
            assert!(app.message().is_none());

            for c in ['1', '5', '2', '4', '3'] {
                app.handle_key(key(KeyCode::Char(c)));
            }
            app.handle_key(key(KeyCode::Char('c')));
            assert_eq!(
                app.message().as_deref(),
                Some("Claim submitted for Player X ((no public id))")
            );
        }
        assert_eq!(claims, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), AppAction::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Left)), AppAction::Continue);
    }
}
