//! Game configuration loaded from TOML
//!
//! ```toml
//! mode = "pve"
//! difficulty = "very-hard"
//! board_size = 6
//! bot_color = "black"
//! think_delay_ms = 500
//! seed = 42
//! layout = "2k3/1pp3/6/6/3PP1/2K3"
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use varchess_core::{
    create_initial_board, Board, BoardError, Color, EditError, Game, PositionEditor,
};

use crate::difficulty::Difficulty;

/// Errors raised while loading or applying a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown difficulty '{name}'")]
    UnknownDifficulty { name: String },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("layout is {found}x{found} but board_size is {expected}")]
    LayoutSize { expected: usize, found: usize },

    #[error("invalid starting position: {0}")]
    Position(#[from] EditError),
}

/// Who plays against whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing the board
    #[serde(rename = "pvp")]
    PvP,
    /// A human against the automated opponent
    #[default]
    #[serde(rename = "pve")]
    PvE,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub board_size: usize,
    /// Side played by the automated opponent in `PvE` mode
    pub bot_color: Color,
    /// Pause before the automated opponent answers
    pub think_delay_ms: u64,
    /// Fixed seed for the opponent's randomness; entropy when absent
    pub seed: Option<u64>,
    /// Starting position; the two kings on an empty board when absent
    pub layout: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PvE,
            difficulty: Difficulty::Medium,
            board_size: 8,
            bot_color: Color::Black,
            think_delay_ms: 500,
            seed: None,
            layout: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected game configuration");
        })
    }

    /// Checks the board size and, when given, that the layout parses to a
    /// board of that size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.starting_board().map(|_| ())
    }

    /// The board the game starts from.
    pub fn starting_board(&self) -> Result<Board, ConfigError> {
        let Some(layout) = &self.layout else {
            return Ok(create_initial_board(self.board_size)?);
        };
        let board = Board::from_layout(layout)?;
        if board.size() as usize != self.board_size {
            return Err(ConfigError::LayoutSize {
                expected: self.board_size,
                found: board.size() as usize,
            });
        }
        Ok(board)
    }

    /// Side driven by the automated opponent, if any.
    pub fn bot_side(&self) -> Option<Color> {
        match self.mode {
            GameMode::PvP => None,
            GameMode::PvE => Some(self.bot_color),
        }
    }

    /// Starts a game with white to move. Black must not start in check.
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        let board = self.starting_board()?;
        Ok(PositionEditor::from_board(board).into_game(Color::White)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
