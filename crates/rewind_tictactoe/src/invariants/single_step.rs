//! Single-step invariant: consecutive snapshots differ by one placement.

use super::super::{Board, GameState, Move};
use super::Invariant;

/// Invariant: history starts empty and grows one mark at a time.
///
/// Snapshot 0 is the empty board. Every later snapshot is its predecessor
/// with exactly one empty square filled, so marks are never overwritten.
pub struct SingleStepHistoryInvariant;

impl Invariant<GameState> for SingleStepHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history.first() == Some(&Board::new())
            && history
                .windows(2)
                .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
