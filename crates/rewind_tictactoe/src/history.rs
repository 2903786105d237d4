//! Game state with move history and time travel.
//!
//! A game is the list of every board it has passed through plus a pointer to
//! the one being shown. Moves are played from the pointed-at snapshot; playing
//! after a jump back discards the snapshots ahead of the pointer first.

use super::action::{JumpError, Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{self, Win};
use super::{Board, Mark, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// History of board snapshots and the current position within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current: usize,
}

impl GameState {
    /// Creates a game holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// Plays the given move indices in order from a new game.
    ///
    /// Indices that would be refused are skipped, as if the click never
    /// happened.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Self {
        let mut game = Self::new();
        for &index in moves {
            game.apply_move(index);
        }
        game
    }

    /// Every snapshot, index 0 being the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// The displayed snapshot.
    pub fn board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Whose turn it is at the displayed snapshot.
    pub fn to_move(&self) -> Mark {
        Mark::for_move_number(self.current)
    }

    /// Winning line on the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::detect(self.board())
    }

    /// Checks whether `index` may be played now, without playing it.
    ///
    /// # Errors
    ///
    /// Returns the reason the move would be ignored.
    pub fn check_move(&self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if let Some(win) = self.winner() {
            return Err(MoveError::GameOver(win.mark()));
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(pos)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Does nothing if the index is off the board, the square is taken, or
    /// the displayed snapshot is already won.
    #[instrument(skip(self), fields(current = self.current, to_move = %self.to_move()))]
    pub fn apply_move(&mut self, index: usize) {
        let pos = match self.check_move(index) {
            Ok(pos) => pos,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                return;
            }
        };

        let next = self.board().with_mark(pos, self.to_move());
        let discarded = self.history.len() - (self.current + 1);
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        debug!(position = %pos, discarded, move_number = self.current, "Move applied");
        self.assert_invariants();
    }

    /// Checks whether `move_number` names a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] past the end of history.
    pub fn check_jump(&self, move_number: usize) -> Result<(), JumpError> {
        if move_number < self.history.len() {
            Ok(())
        } else {
            Err(JumpError::OutOfRange {
                requested: move_number,
                len: self.history.len(),
            })
        }
    }

    /// Shows the snapshot after `move_number` moves. History is kept.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, move_number: usize) {
        if let Err(e) = self.check_jump(move_number) {
            debug!(error = %e, "Jump ignored");
            return;
        }
        self.current = move_number;
        debug!("Jumped");
    }

    /// The displayed snapshot with its turn and winner.
    pub fn current_view(&self) -> View {
        View {
            board: self.board().clone(),
            to_move: self.to_move(),
            win: self.winner(),
            move_number: self.current,
        }
    }

    /// Positions playable right now; empty once the snapshot is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::empty_on(self.board())
    }

    /// One entry per snapshot, for a clickable history list.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(move_number, board)| HistoryEntry {
                move_number,
                action: move_number
                    .checked_sub(1)
                    .and_then(|prev| Move::between(&self.history[prev], board)),
                current: move_number == self.current,
            })
            .collect()
    }

    fn assert_invariants(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated: {:?}",
            GameInvariants::check_all(self)
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of one snapshot, as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    board: Board,
    to_move: Mark,
    win: Option<Win>,
    move_number: usize,
}

impl View {
    /// The snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The winning line, if any.
    pub fn win(&self) -> Option<Win> {
        self.win
    }

    /// Which snapshot this is.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.win.is_some_and(|w| w.contains(pos))
    }

    /// Status for this snapshot.
    pub fn status(&self) -> Status {
        match self.win {
            Some(win) => Status::Won(win.mark()),
            None if rules::is_full(&self.board) => Status::Draw,
            None => Status::NextPlayer(self.to_move),
        }
    }
}

/// Status line for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// A line was completed.
    #[display("Winner: {}", _0)]
    Won(Mark),
    /// The board is full with no line.
    #[display("Draw")]
    Draw,
    /// Play continues.
    #[display("Next Player: {}", _0)]
    NextPlayer(Mark),
}

/// One row of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    move_number: usize,
    action: Option<Move>,
    current: bool,
}

impl HistoryEntry {
    /// Snapshot index to jump to.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// The move that produced this snapshot; `None` for the empty board.
    pub fn action(&self) -> Option<Move> {
        self.action
    }

    /// Whether this is the displayed snapshot.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Button text for the entry.
    pub fn label(&self) -> String {
        if self.move_number == 0 {
            "Go to game start.".to_string()
        } else {
            format!("Go to move #{}", self.move_number)
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
