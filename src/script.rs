//! Headless runner: feed a list of moves through the engine.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_engine::{Board, GameEngine, GameResult, Turn};
use tracing::{debug, info, instrument};

/// Outcome of running a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Final board.
    pub board: Board,
    /// Mark to move next.
    pub turn: Turn,
    /// Final result.
    pub result: GameResult,
    /// Moves that changed the board.
    pub accepted: usize,
    /// Moves the engine ignored.
    pub ignored: usize,
}

impl ScriptReport {
    /// Human-readable rendering: board, then result.
    pub fn render(&self) -> String {
        let outcome = match self.result {
            GameResult::InProgress => format!("In progress, {} to move", self.turn),
            GameResult::Win(mark) => format!("Player {} wins!", mark),
            GameResult::Draw => "It's a draw!".to_string(),
        };
        format!(
            "{}\n\n{}\n{} accepted, {} ignored",
            self.board.display(),
            outcome,
            self.accepted,
            self.ignored
        )
    }
}

/// Parses cell indices separated by commas and/or whitespace.
///
/// Any non-negative integer is allowed; range checking belongs to the engine.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, ScriptError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| ScriptError::new(format!("Not a cell index: {:?}", token)))
        })
        .collect()
}

/// Plays the moves on a fresh engine.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn run(moves: &[usize]) -> ScriptReport {
    let mut engine = GameEngine::new();
    let mut accepted = 0;
    for &cell in moves {
        let before = *engine.state();
        engine.submit_move(cell);
        if *engine.state() != before {
            accepted += 1;
        } else {
            debug!(cell, "Move had no effect");
        }
    }

    let report = ScriptReport {
        board: *engine.board(),
        turn: engine.turn(),
        result: engine.result(),
        accepted,
        ignored: moves.len() - accepted,
    };
    info!(result = %report.result, accepted, ignored = report.ignored, "Script finished");
    report
}

/// Script input error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
