//! Mark balance invariant: X never trails O and leads by at most one.

use super::{Invariant, Transition};
use crate::types::{GameState, Mark};

/// Invariant: `#X - #O` is 0 when X is to move and 1 when O is to move.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        match state.turn() {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Mark counts match the turn (X leads by one when O is to move)"
    }
}

impl Invariant<Transition> for MarkBalanceInvariant {
    fn holds(t: &Transition) -> bool {
        <Self as Invariant<GameState>>::holds(&t.after)
    }

    fn description() -> &'static str {
        <Self as Invariant<GameState>>::description()
    }
}
