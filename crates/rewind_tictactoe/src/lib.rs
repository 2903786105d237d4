//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - [`rules::detect`] finds a completed line on one board.
//! - [`GameState`] keeps every board the game has passed through, a pointer
//!   to the displayed one, and derives whose turn it is from that pointer.
//! - [`Settled`] decorates a game with a [`Settlement`] hook for claiming
//!   a win.
//!
//! Illegal input (an occupied square, a move after a win, a jump past the
//! end of history) leaves the game unchanged.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Mark};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.apply_move(index);
//! }
//! let view = game.current_view();
//! assert_eq!(view.win().map(|w| w.mark()), Some(Mark::X));
//!
//! game.jump_to(2);
//! assert_eq!(game.to_move(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod settlement;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use history::{GameState, HistoryEntry, Status, View};
pub use position::Position;
pub use rules::Win;
pub use settlement::{NoSettlement, Settled, Settlement};
pub use types::{Board, Mark, Square};
