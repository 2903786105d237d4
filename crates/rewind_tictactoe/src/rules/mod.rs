//! Rules of tic-tac-toe, kept as pure functions of a single board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Win, detect};
