//! Full-board check behind the `Draw` status.

use super::super::Board;

/// True once all nine cells hold a mark.
///
/// Says nothing about a winner: callers check [`super::detect`] first.
pub fn is_full(board: &Board) -> bool {
    board.occupied() == board.squares().len()
}
