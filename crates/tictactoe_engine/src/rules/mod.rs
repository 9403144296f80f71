//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here touches turn or engine
//! state, so results can be recomputed on every query.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, check_winner, winning_line};

use crate::types::{Board, GameResult};
use tracing::instrument;

/// Classifies a board as in progress, won, or drawn.
///
/// A winning line takes precedence over a full board; among several winning
/// lines the first in [`Line::ALL`] order is reported.
#[instrument(skip(board))]
pub fn evaluate_result(board: &Board) -> GameResult {
    if let Some(mark) = check_winner(board) {
        GameResult::Win(mark)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_result(&Board::new()), GameResult::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, O, X, O]);
        assert_eq!(evaluate_result(&board), GameResult::Win(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate_result(&board), GameResult::Draw);
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
        assert_eq!(evaluate_result(&board), GameResult::InProgress);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let board = Board::from_cells([O, O, O, X, X, E, X, E, E]);
        let first = evaluate_result(&board);
        assert_eq!(first, evaluate_result(&board));
        assert_eq!(first, GameResult::Win(Mark::O));
    }
}
