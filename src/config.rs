//! Terminal UI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// How long to wait for a key press before redrawing, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    /// Colours for marks and highlights.
    #[serde(default)]
    theme: ThemeConfig,
}

/// Colour settings. Values are colour names or `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Colour of X marks.
    #[serde(default = "default_mark_x")]
    mark_x: String,
    /// Colour of O marks.
    #[serde(default = "default_mark_o")]
    mark_o: String,
    /// Colour of empty-cell numbers.
    #[serde(default = "default_empty")]
    empty: String,
    /// Background of the winning line and the cursor.
    #[serde(default = "default_highlight")]
    highlight: String,
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_mark_x() -> String {
    "#2196F3".to_string()
}

fn default_mark_o() -> String {
    "#FF4081".to_string()
}

fn default_empty() -> String {
    "#BBBBBB".to_string()
}

fn default_highlight() -> String {
    "#FFD54F".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mark_x: default_mark_x(),
            mark_o: default_mark_o(),
            empty: default_empty(),
            highlight: default_highlight(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            theme: ThemeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(poll_interval_ms = config.poll_interval_ms, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        // Surface bad colours at load time, not first draw.
        config.theme.palette()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Poll interval as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Resolved colours ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// X marks.
    pub mark_x: Color,
    /// O marks.
    pub mark_o: Color,
    /// Empty cells.
    pub empty: Color,
    /// Winning line and cursor.
    pub highlight: Color,
}

impl ThemeConfig {
    /// Parses every colour string.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            mark_x: parse_color("mark_x", &self.mark_x)?,
            mark_o: parse_color("mark_o", &self.mark_o)?,
            empty: parse_color("empty", &self.empty)?,
            highlight: parse_color("highlight", &self.highlight)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid colour for theme.{}: {:?}", key, value)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
