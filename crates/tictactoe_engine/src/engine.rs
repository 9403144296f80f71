//! The game engine: one owned game, mutated by moves and restarts.

use crate::invariants::{InvariantSet, MoveInvariants, Transition};
use crate::position::Position;
use crate::rejection::MoveRejection;
use crate::rules::{self, Line};
use crate::types::{Board, GameResult, GameState, Mark, Turn};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe game engine.
///
/// Invalid moves are ignored rather than reported: `submit_move` on an
/// occupied cell, an out-of-range index, or a finished game leaves the state
/// untouched and returns nothing. Front-ends that need the reason ask
/// [`GameEngine::check_move`].
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the mark placed by the next successful move.
    pub fn turn(&self) -> Turn {
        self.state.turn()
    }

    /// Evaluates the current board.
    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    /// Returns the first completed line and its mark, if any.
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        rules::winning_line(self.state.board())
    }

    /// Checks whether a move at `cell` would be accepted.
    pub fn check_move(&self, cell: usize) -> Result<Position, MoveRejection> {
        self.state.check_move(cell)
    }

    /// Places the current mark at `cell` (0-8) and passes the turn.
    ///
    /// Does nothing if the index is out of range, the cell is occupied, or
    /// the game is over.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn submit_move(&mut self, cell: usize) {
        let pos = match self.state.check_move(cell) {
            Ok(pos) => pos,
            Err(rejection) => {
                debug!(%rejection, "Ignoring move");
                return;
            }
        };

        let before = self.state;
        self.state.place(pos);
        debug!(position = %pos, "Move accepted");

        if cfg!(debug_assertions) {
            self.verify(before);
        }

        match self.state.result() {
            GameResult::InProgress => {}
            result => info!(%result, "Game concluded"),
        }
    }

    /// Discards the current game and starts over with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::new();
        info!("Game restarted");
    }

    fn verify(&self, before: GameState) {
        let transition = Transition::new(before, self.state);
        if let Err(violations) = <MoveInvariants as InvariantSet<Transition>>::check_all(&transition) {
            for violation in &violations {
                error!(%violation, ?transition, "Engine invariant failed");
            }
            debug_assert!(violations.is_empty(), "{violations:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_submit_move_places_current_mark() {
        let mut engine = GameEngine::new();
        engine.submit_move(4);
        assert_eq!(engine.board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(engine.turn(), Mark::O);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut engine = GameEngine::new();
        engine.submit_move(9);
        engine.submit_move(usize::MAX);
        assert_eq!(engine.state(), &GameState::new());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut engine = GameEngine::new();
        for cell in [0, 3, 1, 4, 2] {
            engine.submit_move(cell);
        }
        assert_eq!(engine.result(), GameResult::Win(Mark::X));
        engine.restart();
        assert_eq!(engine.state(), &GameState::new());
        assert_eq!(engine.result(), GameResult::InProgress);
    }

    #[test]
    fn test_winning_line_follows_board() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.winning_line(), None);
        for cell in [0, 3, 1, 4, 2] {
            engine.submit_move(cell);
        }
        assert_eq!(engine.winning_line(), Some((Line::Row(0), Mark::X)));
    }
}
