//! Rewind library - tic-tac-toe with move history and time travel.
//!
//! The game rules and history live in [`rewind_tictactoe`]. This crate adds
//! the pieces around them: the participant roster, a headless replay
//! report, and the terminal UI.
//!
//! # Example
//!
//! ```
//! use rewind::{AppConfig, render_text, replay};
//!
//! let game = replay(&[0, 4, 1, 3, 2], None);
//! let report = render_text(&game, &AppConfig::default());
//! assert!(report.contains("Winner: X (Player X)"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, Participant};

// Crate-level exports - Headless replay
pub use replay::{render_json, render_text, replay, status_line};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, run_tui};

// Crate-level exports - Game core
pub use rewind_tictactoe::{
    Board, GameState, HistoryEntry, Mark, Move, NoSettlement, Position, Settled, Settlement,
    Square, Status, View, Win,
};
