//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Engine**: rules and state live in the `tictactoe_engine` crate
//! - **View**: pure derivations for front-ends (status text, cell labels)
//! - **TUI**: ratatui front-end driving the engine from key presses
//! - **Script**: headless runner that plays a list of cell indices

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod script;
pub mod tui;
pub mod view;

pub use config::{ConfigError, Palette, ThemeConfig, TuiConfig};
pub use script::{ScriptError, ScriptReport};
pub use tictactoe_engine::{
    Board, Cell, GameEngine, GameResult, GameState, Line, Mark, MoveRejection, Position, Turn,
    evaluate_result,
};
