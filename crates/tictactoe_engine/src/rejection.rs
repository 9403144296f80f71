//! Reasons a move is not accepted.

use crate::position::Position;
use derive_more::{Display, Error};

/// Why a move would be ignored.
///
/// `GameEngine::submit_move` never returns this; it only logs it. Callers
/// that want to know in advance ask `check_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// Index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// A win or draw has already been reached.
    #[display("Game is already over")]
    GameOver,
}
