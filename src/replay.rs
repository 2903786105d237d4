//! Headless replay: play a list of moves and print where the game ended up.

use crate::config::AppConfig;
use rewind_tictactoe::{GameState, HistoryEntry, Mark, Status, View};
use serde::Serialize;
use tracing::{info, instrument};

/// Plays `moves` from a new game, then jumps to `jump` if given.
///
/// Refused moves and jumps are skipped exactly as in interactive play.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> GameState {
    let mut game = GameState::replay(moves);
    if let Some(move_number) = jump {
        game.jump_to(move_number);
    }
    info!(
        snapshots = game.history().len(),
        current = game.current_move(),
        "Replay finished"
    );
    game
}

/// Human-readable report of a game.
pub fn render_text(game: &GameState, config: &AppConfig) -> String {
    let view = game.current_view();
    let mut out = String::new();

    out.push_str(&view.board().display());
    out.push_str("\n\n");
    out.push_str(&status_line(&view, config));
    out.push('\n');
    if let Some(win) = view.win() {
        let line = win.indices().map(|i| i.to_string()).join(", ");
        out.push_str(&format!("Winning line: {}\n", line));
    }

    out.push_str("\nHistory:\n");
    for entry in game.history_entries() {
        let marker = if entry.is_current() { '>' } else { ' ' };
        match entry.action() {
            Some(action) => out.push_str(&format!("{} {}  ({})\n", marker, entry, action)),
            None => out.push_str(&format!("{} {}\n", marker, entry)),
        }
    }

    out.push_str("\nParticipants:\n");
    for mark in [Mark::X, Mark::O] {
        let participant = config.participant(mark);
        out.push_str(&format!(
            "  {}: {} [{}]\n",
            mark,
            participant.name(),
            participant.public_id_or_placeholder()
        ));
    }
    out
}

/// Status text followed by the name of the participant it concerns.
pub fn status_line(view: &View, config: &AppConfig) -> String {
    let status = view.status();
    match status {
        Status::Won(mark) | Status::NextPlayer(mark) => {
            format!("{} ({})", status, config.participant(mark).name())
        }
        Status::Draw => status.to_string(),
    }
}

#[derive(Serialize)]
struct Report<'a> {
    view: View,
    status: String,
    history: Vec<HistoryEntry>,
    participants: &'a AppConfig,
}

/// Machine-readable report of a game.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render_json(game: &GameState, config: &AppConfig) -> serde_json::Result<String> {
    let view = game.current_view();
    let report = Report {
        status: view.status().to_string(),
        view,
        history: game.history_entries(),
        participants: config,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_applied_after_moves() {
        let game = replay(&[0, 4, 1], Some(1));
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_out_of_range_jump_keeps_tail() {
        let game = replay(&[0, 4, 1], Some(42));
        assert_eq!(game.current_move(), 3);
    }

    #[test]
    fn test_status_line_names_participant() {
        let config = AppConfig::default();
        let view = replay(&[], None).current_view();
        assert_eq!(status_line(&view, &config), "Next Player: X (Player X)");
    }
}
