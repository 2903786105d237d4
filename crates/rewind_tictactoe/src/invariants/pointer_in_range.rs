//! Pointer invariant: the current move always names a snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: history is never empty and the pointer is inside it.
pub struct PointerInRangeInvariant;

impl Invariant<GameState> for PointerInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history().is_empty() && game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move points inside a non-empty history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_rejected_jump() {
        let mut game = GameState::replay(&[0, 1]);
        game.jump_to(10);
        assert!(PointerInRangeInvariant::holds(&game));
        assert_eq!(game.current_move(), 2);
    }
}
