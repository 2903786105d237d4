//! Moves and the reasons a move or jump is refused.
//!
//! Refusals are never surfaced to the player: the game ignores an illegal
//! click. They exist so the game can log why, and so callers that want to
//! pre-validate input can ask.

use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    mark: Mark,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// The mark placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Where it was placed.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one square differs and that square went
    /// from empty to occupied.
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = Position::ALL
            .into_iter()
            .filter(|pos| before.get(*pos) != after.get(*pos));

        let position = changed.next()?;
        if changed.next().is_some() {
            return None;
        }

        match (before.get(position), after.get(position)) {
            (Square::Empty, Square::Occupied(mark)) => Some(Self { mark, position }),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move index is not a board cell.
    #[display("Move index {} is outside 0-8", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),
}

impl std::error::Error for MoveError {}

/// Why a jump through history was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The move number is past the end of history.
    #[display("Move {} does not exist (history has {} snapshots)", requested, len)]
    OutOfRange {
        /// Requested move number.
        requested: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
