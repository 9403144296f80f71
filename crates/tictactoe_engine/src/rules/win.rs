//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that wins when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row 0-2, top to bottom.
    Row(u8),
    /// Column 0-2, left to right.
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Lines in the order they are scanned.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three cell indices of this line.
    pub fn indices(self) -> [usize; 3] {
        match self {
            Line::Row(r) => {
                let r = usize::from(r) * 3;
                [r, r + 1, r + 2]
            }
            Line::Column(c) => {
                let c = usize::from(c);
                [c, c + 3, c + 6]
            }
            Line::Diagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }

    /// The three positions of this line.
    pub fn positions(self) -> [Position; 3] {
        self.indices().map(|i| Position::ALL[i])
    }

    /// Whether the line passes through `pos`.
    pub fn contains(self, pos: Position) -> bool {
        self.indices().contains(&pos.to_index())
    }
}

/// Returns the first uniformly marked line, with its mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((line, mark))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
