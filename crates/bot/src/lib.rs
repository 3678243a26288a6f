//! Automated opponent for varchess
//!
//! This crate maps a [`Difficulty`] onto one of the move-selection engines:
//! - Easy: [`RandomEngine`]
//! - Medium: [`GreedyEngine`]
//! - Hard / Very Hard: [`ClassicalEngine`] at 2 and 3 plies
//!
//! [`Bot`] drives one side of a [`Game`], committing its moves through the
//! same path as human moves.

mod config;
mod difficulty;
mod paced;

use std::time::Duration;

use classical_engine::ClassicalEngine;
use greedy_engine::GreedyEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use random_engine::RandomEngine;
use tracing::debug;
use varchess_core::{Board, Color, Engine, Game, GameError, Move};

pub use config::*;
pub use difficulty::Difficulty;
pub use paced::PacedEngine;

/// Builds the engine for `difficulty`, seeded when `seed` is given.
pub fn create_engine(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Engine> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match (difficulty, difficulty.search_depth()) {
        (_, Some(depth)) => Box::new(ClassicalEngine::with_rng(depth, rng)),
        (Difficulty::Easy, None) => Box::new(RandomEngine::with_rng(rng)),
        (_, None) => Box::new(GreedyEngine::with_rng(rng)),
    }
}

/// One-shot move selection with an explicit randomness source.
///
/// Returns `None` only when `side` has no legal move.
pub fn select_automated_move<R: Rng + Send>(
    board: &Board,
    side: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let result = match (difficulty, difficulty.search_depth()) {
        (_, Some(depth)) => ClassicalEngine::with_rng(depth, rng).search(board, side),
        (Difficulty::Easy, None) => RandomEngine::with_rng(rng).search(board, side),
        (_, None) => GreedyEngine::with_rng(rng).search(board, side),
    };
    result.best_move
}

/// The automated opponent: a difficulty and the engine that plays it.
pub struct Bot {
    difficulty: Difficulty,
    engine: Box<dyn Engine>,
}

impl Bot {
    /// A bot that answers immediately.
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            difficulty,
            engine: create_engine(difficulty, seed),
        }
    }

    /// A bot that waits `delay` before every move.
    pub fn paced(difficulty: Difficulty, seed: Option<u64>, delay: Duration) -> Self {
        Self {
            difficulty,
            engine: Box::new(PacedEngine::new(create_engine(difficulty, seed), delay)),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::paced(
            config.difficulty,
            config.seed,
            Duration::from_millis(config.think_delay_ms),
        )
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn name(&self) -> &str {
        self.engine.name()
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
    }

    pub fn select_move(&mut self, board: &Board, side: Color) -> Option<Move> {
        let result = self.engine.search(board, side);
        debug!(
            difficulty = %self.difficulty,
            %side,
            best_move = ?result.best_move,
            nodes = result.nodes,
            "bot selected move"
        );
        result.best_move
    }

    /// Picks a move for the side to move and commits it to `game`.
    ///
    /// Returns `Ok(None)` when that side has no legal move.
    pub fn play_turn(&mut self, game: &mut Game) -> Result<Option<Move>, GameError> {
        if game.outcome().is_over() {
            return Err(GameError::GameOver);
        }
        let side = game.side_to_move();
        let Some(mv) = self.select_move(game.board(), side) else {
            return Ok(None);
        };
        game.play(mv)?;
        Ok(Some(mv))
    }
}
