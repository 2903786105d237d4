//! Alternating turn invariant: marks go X, O, X, O, ...

use super::super::{GameState, Mark, Move};
use super::Invariant;

/// Invariant: the mark added at step `n` belongs to the player whose turn
/// it was after `n - 1` moves.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match Move::between(&pair[0], &pair[1]) {
                Some(action) => action.mark() == Mark::for_move_number(step),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
