//! Pure tic-tac-toe game engine.
//!
//! The engine owns one [`GameState`] (board and turn) and changes it only
//! through [`GameEngine::submit_move`] and [`GameEngine::restart`]. The game
//! result is never stored; [`evaluate_result`] recomputes it from the board.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameResult, Mark};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.submit_move(cell);
//! }
//! assert_eq!(engine.result(), GameResult::Win(Mark::X));
//!
//! // Moves after the game is over are ignored.
//! engine.submit_move(8);
//! assert!(engine.board().cell(8).is_some_and(|c| c.mark().is_none()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod position;
mod rejection;
pub mod rules;
mod types;

pub use engine::GameEngine;
pub use position::Position;
pub use rejection::MoveRejection;
pub use rules::{Line, evaluate_result};
pub use types::{Board, Cell, GameResult, GameState, Mark, Turn};
