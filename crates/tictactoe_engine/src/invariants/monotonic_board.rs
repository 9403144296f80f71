//! Monotonic board invariant: cells never change once marked.

use super::{Invariant, Transition};
use crate::types::Cell;

/// Invariant: no cell leaves a non-empty value.
///
/// Once a cell transitions from `Empty` to `Occupied`, it never changes.
pub struct MonotonicBoardInvariant;

impl Invariant<Transition> for MonotonicBoardInvariant {
    fn holds(t: &Transition) -> bool {
        t.before
            .board()
            .cells()
            .iter()
            .zip(t.after.board().cells())
            .all(|(before, after)| *before == Cell::Empty || before == after)
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{GameState, Mark};

    #[test]
    fn test_empty_to_single_move_holds() {
        let before = GameState::new();
        let after = before.with_move(4);
        assert!(MonotonicBoardInvariant::holds(&Transition::new(before, after)));
    }

    #[test]
    fn test_rejected_move_holds() {
        let before = GameState::new().with_move(4);
        let after = before.with_move(4);
        assert!(MonotonicBoardInvariant::holds(&Transition::new(before, after)));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let before = GameState::new().with_move(4);
        let mut after = before;
        after
            .board_mut()
            .set(Position::Center, Cell::Occupied(Mark::O));
        assert!(!MonotonicBoardInvariant::holds(&Transition::new(before, after)));
    }

    #[test]
    fn test_cleared_cell_violates() {
        let before = GameState::new().with_move(0);
        let after = GameState::new();
        assert!(!MonotonicBoardInvariant::holds(&Transition::new(before, after)));
    }
}
