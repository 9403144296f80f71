//! Tests for the headless move script runner.

use tictactoe::script::{self, ScriptReport};
use tictactoe::{GameResult, Mark};

#[test]
fn test_parse_accepts_commas_and_whitespace() {
    assert_eq!(script::parse_moves("0,3, 1 4\t2").unwrap(), vec![0, 3, 1, 4, 2]);
    assert_eq!(script::parse_moves("").unwrap(), Vec::<usize>::new());
    assert_eq!(script::parse_moves("12").unwrap(), vec![12]);
}

#[test]
fn test_parse_rejects_non_numbers() {
    let err = script::parse_moves("0,a,2").unwrap_err();
    assert!(err.message.contains("\"a\""));
    assert!(script::parse_moves("-1").is_err());
}

#[test]
fn test_run_top_row_win() {
    let report = script::run(&[0, 3, 1, 4, 2]);
    assert_eq!(report.result, GameResult::Win(Mark::X));
    assert_eq!(report.accepted, 5);
    assert_eq!(report.ignored, 0);
}

#[test]
fn test_run_counts_ignored_moves() {
    // Repeat, out of range, then a move after the win.
    let report = script::run(&[0, 0, 3, 42, 1, 4, 2, 8]);
    assert_eq!(report.result, GameResult::Win(Mark::X));
    assert_eq!(report.accepted, 5);
    assert_eq!(report.ignored, 3);
    assert_eq!(report.board.cell(8).and_then(|c| c.mark()), None);
}

#[test]
fn test_render_draw() {
    let report = script::run(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let text = report.render();
    assert!(text.starts_with("X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X"));
    assert!(text.contains("It's a draw!"));
}

#[test]
fn test_render_in_progress_names_next_mark() {
    let report: ScriptReport = script::run(&[4]);
    assert!(report.render().contains("In progress, O to move"));
}

#[test]
fn test_report_json_shape() {
    let report = script::run(&[0, 3, 1, 4, 2]);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["result"], serde_json::json!({ "Win": "X" }));
    assert_eq!(json["turn"], "O");
    assert_eq!(json["accepted"], 5);
}
