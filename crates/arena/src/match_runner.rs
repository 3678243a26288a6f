//! Match runner for playing games between difficulty levels

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};
use varchess_bot::{Bot, ConfigError, Difficulty};
use varchess_core::{create_initial_board, Board, Color, Game, GameError, PositionEditor};

use crate::results::{GameRecord, MatchReport, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Board size, 5 to 10
    pub board_size: usize,
    /// Starting position; the two kings on an empty board when absent
    pub layout: Option<String>,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Base seed; each game derives its own bot seeds from it
    pub seed: Option<u64>,
    /// Log every finished game
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            board_size: 8,
            layout: None,
            max_plies: 200,
            alternate_colors: true,
            seed: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(s)?;
        config.starting_board()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected match configuration");
        })
    }

    /// The board every game starts from, white to move.
    pub fn starting_board(&self) -> Result<Board, ConfigError> {
        let board = match &self.layout {
            Some(layout) => Board::from_layout(layout)?,
            None => create_initial_board(self.board_size)?,
        };
        if board.size() as usize != self.board_size {
            return Err(ConfigError::LayoutSize {
                expected: self.board_size,
                found: board.size() as usize,
            });
        }
        PositionEditor::from_board(board.clone()).validate(Color::White)?;
        Ok(board)
    }
}

/// Runs matches between two difficulty levels
pub struct MatchRunner {
    config: MatchConfig,
    start: Board,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        let start = config.starting_board()?;
        Ok(Self { config, start })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two difficulty levels
    ///
    /// `first` plays white in the first game. The tally is from `first`'s
    /// perspective.
    pub fn run_match(
        &self,
        first: Difficulty,
        second: Difficulty,
    ) -> Result<MatchReport, GameError> {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        info!(
            %first,
            %second,
            games = self.config.num_games,
            size = self.config.board_size,
            "match started"
        );

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let first_white = !self.config.alternate_colors || game_num % 2 == 0;
            let (white, black) = if first_white {
                (first, second)
            } else {
                (second, first)
            };

            let seed = self
                .config
                .seed
                .map(|s| s.wrapping_add(2 * game_num as u64));
            let mut white_bot = Bot::new(white, seed);
            let mut black_bot = Bot::new(black, seed.map(|s| s.wrapping_add(1)));

            let record = self.play_game(&mut white_bot, &mut black_bot)?;
            let game_result = if first_white {
                record.result()
            } else {
                record.result().flipped()
            };
            result.record(game_result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    %white,
                    %black,
                    plies = record.plies(),
                    outcome = ?record.outcome,
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game finished"
                );
            }
            games.push(record);
        }

        info!(
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );

        Ok(MatchReport {
            first,
            second,
            config: self.config.clone(),
            result,
            games,
        })
    }

    /// Play a single game from the configured start, white moving first
    pub fn play_game(&self, white: &mut Bot, black: &mut Bot) -> Result<GameRecord, GameError> {
        let mut game = Game::new(self.start.clone(), Color::White);
        white.new_game();
        black.new_game();

        let mut moves = Vec::new();
        while !game.outcome().is_over() && moves.len() < self.config.max_plies as usize {
            let bot = match game.side_to_move() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            match bot.play_turn(&mut game)? {
                Some(mv) => moves.push(mv),
                None => break,
            }
        }

        Ok(GameRecord {
            white: white.difficulty(),
            black: black.difficulty(),
            start: self.start.layout(),
            moves,
            outcome: game.outcome(),
            truncated: !game.outcome().is_over(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
