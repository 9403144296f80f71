//! tictactoe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe::cli::{Cli, Command};
use tictactoe::{TuiConfig, script, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let config = TuiConfig::load_or_default(&cli.config)?;
            tui::run_tui(&config)
        }
        Command::Script { moves, json } => run_script(&moves, json),
    }
}

/// Logs go to a file so they never draw over the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_script(moves: &str, json: bool) -> Result<()> {
    let moves = script::parse_moves(moves)?;
    info!(count = moves.len(), "Running move script");
    let report = script::run(&moves);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
