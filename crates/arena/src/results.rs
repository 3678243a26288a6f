//! Match results, per-game records and JSON reports

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use varchess_bot::Difficulty;
use varchess_core::{Color, Move, Outcome};

use crate::match_runner::MatchConfig;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to access report file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first entrant's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: Difficulty,
    pub black: Difficulty,
    /// Starting position in layout notation
    pub start: String,
    pub moves: Vec<Move>,
    pub outcome: Outcome,
    /// True when the game was stopped at the ply limit
    pub truncated: bool,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Result from white's perspective; a truncated game is a draw.
    pub fn result(&self) -> GameResult {
        match self.outcome.winner() {
            Some(Color::White) => GameResult::Win,
            Some(Color::Black) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Everything a match produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub first: Difficulty,
    pub second: Difficulty,
    pub config: MatchConfig,
    /// Tally from `first`'s perspective
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.first, self.second));
        report.push_str(&format!(
            "Config: {} games, {}x{} board, {} plies max\n\n",
            self.config.num_games,
            self.config.board_size,
            self.config.board_size,
            self.config.max_plies
        ));

        report.push_str(&format!(
            "{:<6} {:<10} {:<10} {:>6}  {}\n",
            "Game", "White", "Black", "Plies", "Outcome"
        ));
        report.push_str(&"-".repeat(50));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let outcome = match game.outcome {
                Outcome::Checkmate {
                    winner: Color::White,
                } => "1-0",
                Outcome::Checkmate {
                    winner: Color::Black,
                } => "0-1",
                Outcome::Stalemate => "1/2 stalemate",
                Outcome::InProgress => "1/2 ply limit",
            };
            report.push_str(&format!(
                "{:<6} {:<10} {:<10} {:>6}  {}\n",
                i + 1,
                game.white.to_string(),
                game.black.to_string(),
                game.plies(),
                outcome
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.first,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
