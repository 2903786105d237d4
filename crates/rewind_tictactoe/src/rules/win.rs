//! Win detection for tic-tac-toe.

use super::super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning mark and the three cells it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    mark: Mark,
    line: [Position; 3],
}

impl Win {
    /// The winning mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The three cells forming the line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The line as move indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks the board for three identical marks in a line.
///
/// Lines are tried in [`LINES`] order and the first match is returned.
#[instrument]
pub fn detect(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some(Win { mark, line })
    })
}
