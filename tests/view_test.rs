//! Tests for the presentation view-model.

use tictactoe::view::{self, CellTone};
use tictactoe::{GameState, Mark, Position};

fn play(moves: &[usize]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &cell| state.with_move(cell))
}

#[test]
fn test_status_text_for_each_phase() {
    assert_eq!(view::status_text(&GameState::new()), "Next turn: X");
    assert_eq!(view::status_text(&play(&[4])), "Next turn: O");
    assert_eq!(view::status_text(&play(&[0, 3, 1, 4, 2])), "Player X wins!");
    assert_eq!(
        view::status_text(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8])),
        "It's a draw!"
    );
}

#[test]
fn test_cell_labels_are_one_based() {
    let state = play(&[0, 8]);
    assert_eq!(view::cell_label(state.board(), Position::TopLeft), "Cell 1, X");
    assert_eq!(view::cell_label(state.board(), Position::Center), "Cell 5, empty");
    assert_eq!(view::cell_label(state.board(), Position::BottomRight), "Cell 9, O");
}

#[test]
fn test_occupied_cells_are_not_interactive() {
    let state = play(&[4]);
    assert!(!view::is_cell_interactive(&state, Position::Center));
    assert!(view::is_cell_interactive(&state, Position::TopLeft));
}

#[test]
fn test_no_cell_is_interactive_after_win() {
    let state = play(&[0, 3, 1, 4, 2]);
    assert!(
        Position::ALL
            .iter()
            .all(|pos| !view::is_cell_interactive(&state, *pos))
    );
}

#[test]
fn test_winning_line_is_toned() {
    let state = play(&[0, 3, 1, 4, 2]);
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(view::cell_tone(&state, pos), CellTone::Winning(Mark::X));
    }
    assert_eq!(view::cell_tone(&state, Position::MiddleLeft), CellTone::Mark(Mark::O));
    assert_eq!(view::cell_tone(&state, Position::BottomRight), CellTone::Empty);
}
