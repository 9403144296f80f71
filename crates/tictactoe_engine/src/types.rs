//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rejection::MoveRejection;
use crate::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Whose mark is placed by the next successful move.
pub type Turn = Mark;

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board stored in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells.
    ///
    /// Boards built this way need not be reachable by alternating play; rule
    /// evaluation accepts them anyway.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Overwrites a cell. Only the engine and invariant tests write cells.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Formats the board as text, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.cells[idx] {
                    Cell::Empty => (idx + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Classification of a board. Always derived from the board, never stored.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Nobody has won and empty cells remain.
    #[display("in progress")]
    InProgress,
    /// A line is filled with one mark.
    #[display("{_0} wins")]
    Win(Mark),
    /// Board full without a winning line.
    #[display("draw")]
    Draw,
}

impl GameResult {
    /// True for `Win` and `Draw`.
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }
}

/// The owned state of one game: board plus turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Turn,
}

impl GameState {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark placed by the next successful move.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Evaluates the board.
    pub fn result(&self) -> GameResult {
        rules::evaluate_result(&self.board)
    }

    /// Checks whether a move at `cell` would be accepted.
    #[instrument(skip(self))]
    pub fn check_move(&self, cell: usize) -> Result<Position, MoveRejection> {
        let pos = Position::from_index(cell).ok_or(MoveRejection::OutOfRange(cell))?;
        if self.result().is_over() {
            return Err(MoveRejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveRejection::CellOccupied(pos));
        }
        Ok(pos)
    }

    /// Returns the state after a move at `cell`, or `self` unchanged if the
    /// move is rejected.
    pub fn with_move(mut self, cell: usize) -> Self {
        if let Ok(pos) = self.check_move(cell) {
            self.place(pos);
        }
        self
    }

    /// Places the current mark and flips the turn. Caller validates.
    pub(crate) fn place(&mut self, pos: Position) {
        self.board.set(pos, Cell::Occupied(self.turn));
        self.turn = self.turn.opponent();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
