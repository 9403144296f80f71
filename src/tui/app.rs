//! Application state and key handling.

use super::input;
use crate::config::Palette;
use crossterm::event::KeyCode;
use tictactoe_engine::{GameEngine, Position};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    palette: Palette,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(palette: Palette) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            palette,
            should_quit: false,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the colours in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    ///
    /// Moves on occupied cells or after the game ends are passed to the
    /// engine anyway; it ignores them.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.engine.submit_move(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(pos) = input::digit_cell(c) {
                    self.cursor = pos;
                    self.engine.submit_move(pos.to_index());
                }
            }
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
    }

    /// Restarts the game and recentres the cursor.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.restart();
        self.cursor = Position::Center;
    }
}
