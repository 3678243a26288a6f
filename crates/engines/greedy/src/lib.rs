//! Capture-Greedy Engine
//!
//! Prefers captures without looking at what is captured: when at least one
//! capture exists it plays a random capture most of the time, otherwise a
//! random legal move. There is no lookahead.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use varchess_core::{legal_moves_into, Board, Color, Engine, Move, SearchResult};


/// Probability of restricting the choice to captures when any exist.
pub const CAPTURE_BIAS: f64 = 0.7;

#[derive(Debug, Clone)]
pub struct GreedyEngine<R = StdRng> {
    rng: R,
    capture_bias: f64,
    moves: Vec<Move>,
    captures: Vec<Move>,
}

impl GreedyEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GreedyEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GreedyEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            capture_bias: CAPTURE_BIAS,
            moves: Vec::with_capacity(64),
            captures: Vec::with_capacity(16),
        }
    }

    /// Override the capture probability, clamped to `0.0..=1.0`.
    pub fn with_capture_bias(mut self, bias: f64) -> Self {
        self.capture_bias = bias.clamp(0.0, 1.0);
        self
    }

    pub fn capture_bias(&self) -> f64 {
        self.capture_bias
    }
}

impl<R: Rng + Send> Engine for GreedyEngine<R> {
    fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        legal_moves_into(board, side, &mut self.moves);

        self.captures.clear();
        self.captures.extend(
            self.moves
                .iter()
                .copied()
                .filter(|mv| board.piece_at(mv.to).is_some()),
        );

        // the coin is only flipped when there is something to capture
        let pool = if !self.captures.is_empty() && self.rng.gen_bool(self.capture_bias) {
            &self.captures
        } else {
            &self.moves
        };

        SearchResult {
            best_move: pool.choose(&mut self.rng).copied(),
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
