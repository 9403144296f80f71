//! Presentation view-model derived from engine state.
//!
//! Front-ends render these values; none of them change the game.

use tictactoe_engine::{Board, Cell, GameResult, GameState, Mark, Position, rules};

/// Status line: the winner, a draw, or whose turn it is.
pub fn status_text(state: &GameState) -> String {
    match state.result() {
        GameResult::Win(mark) => format!("Player {} wins!", mark),
        GameResult::Draw => "It's a draw!".to_string(),
        GameResult::InProgress => format!("Next turn: {}", state.turn()),
    }
}

/// Accessible label for a cell, numbered 1-9.
pub fn cell_label(board: &Board, pos: Position) -> String {
    let content = match board.get(pos) {
        Cell::Empty => "empty".to_string(),
        Cell::Occupied(mark) => mark.to_string(),
    };
    format!("Cell {}, {}", pos.to_index() + 1, content)
}

/// Whether clicking the cell could place a mark.
pub fn is_cell_interactive(state: &GameState, pos: Position) -> bool {
    state.check_move(pos.to_index()).is_ok()
}

/// Which palette role colours a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Mark(Mark),
    /// Cell on the winning line.
    Winning(Mark),
}

/// Picks the tone for a cell.
pub fn cell_tone(state: &GameState, pos: Position) -> CellTone {
    if let Some((line, mark)) = rules::winning_line(state.board())
        && line.contains(pos)
    {
        return CellTone::Winning(mark);
    }
    match state.board().get(pos) {
        Cell::Empty => CellTone::Empty,
        Cell::Occupied(mark) => CellTone::Mark(mark),
    }
}
