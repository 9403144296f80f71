//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// File that receives log output
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Run a list of moves through the engine and print the outcome
    Script {
        /// Cell indices 0-8, separated by commas or whitespace (e.g. "0,3,1,4,2")
        moves: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
