//! Extension point for acting on a won game.
//!
//! A winner can "claim" the game. What a claim does (paying out, recording
//! the result somewhere) is not decided here; the game only guarantees the
//! hook runs for a snapshot that has a winner.

use super::history::{GameState, View};
use tracing::{debug, info, instrument};

/// Action run when a won game is claimed.
pub trait Settlement {
    /// Claims the current win.
    fn claim(&mut self);
}

impl<F: FnMut()> Settlement for F {
    fn claim(&mut self) {
        self()
    }
}

/// Settlement that only records the claim in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSettlement;

impl Settlement for NoSettlement {
    fn claim(&mut self) {
        info!("Claim requested; no settlement configured");
    }
}

/// A game decorated with a settlement hook.
pub struct Settled<S> {
    game: GameState,
    settlement: S,
}

impl<S> Settled<S> {
    /// Wraps `game` so wins can be claimed through `settlement`.
    pub fn new(game: GameState, settlement: S) -> Self {
        Self { game, settlement }
    }

    /// The wrapped game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// See [`GameState::current_view`].
    pub fn current_view(&self) -> View {
        self.game.current_view()
    }

    /// Unwraps into the game and the hook.
    pub fn into_parts(self) -> (GameState, S) {
        (self.game, self.settlement)
    }
}

impl<S: Settlement> Settled<S> {
    /// See [`GameState::apply_move`].
    pub fn apply_move(&mut self, index: usize) {
        self.game.apply_move(index);
    }

    /// See [`GameState::jump_to`].
    pub fn jump_to(&mut self, move_number: usize) {
        self.game.jump_to(move_number);
    }

    /// Runs the settlement hook if the displayed snapshot has a winner.
    ///
    /// Returns whether the hook ran.
    #[instrument(skip(self), fields(move_number = self.game.current_move()))]
    pub fn claim(&mut self) -> bool {
        match self.game.winner() {
            Some(win) => {
                info!(winner = %win.mark(), line = ?win.indices(), "Claiming win");
                self.settlement.claim();
                true
            }
            None => {
                debug!("Claim ignored, no winner on this snapshot");
                false
            }
        }
    }
}

impl<S> std::fmt::Debug for Settled<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settled")
            .field("game", &self.game)
            .finish_non_exhaustive()
    }
}
