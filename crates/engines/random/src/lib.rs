//! Random Move Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - The easiest automated opponent
//! - Baseline comparisons (any searching engine should beat this)
//! - Stress testing move generation across board sizes

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use varchess_core::{legal_moves_into, Board, Color, Engine, Move, SearchResult};


/// An engine that plays random legal moves.
///
/// No evaluation is done. The random source is pluggable so that games can
/// be replayed from a seed.
#[derive(Debug, Clone)]
pub struct RandomEngine<R = StdRng> {
    rng: R,
    moves: Vec<Move>,
}

impl RandomEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            moves: Vec::with_capacity(64),
        }
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        legal_moves_into(board, side, &mut self.moves);

        SearchResult {
            best_move: self.moves.choose(&mut self.rng).copied(),
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
