//! Alternating turn invariant: the turn flips exactly on accepted moves.

use super::{Invariant, Transition};
use crate::types::Cell;

/// Invariant: the turn flips iff exactly one cell was filled, and the filled
/// cell carries the mark whose turn it was.
pub struct AlternatingTurnInvariant;

impl Invariant<Transition> for AlternatingTurnInvariant {
    fn holds(t: &Transition) -> bool {
        let filled: Vec<Cell> = t
            .before
            .board()
            .cells()
            .iter()
            .zip(t.after.board().cells())
            .filter(|(before, after)| before != after)
            .map(|(_, after)| *after)
            .collect();

        match filled.as_slice() {
            [] => t.after.turn() == t.before.turn(),
            [cell] => {
                *cell == Cell::Occupied(t.before.turn())
                    && t.after.turn() == t.before.turn().opponent()
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Turn flips exactly once per accepted move (X, O, X, ...)"
    }
}
