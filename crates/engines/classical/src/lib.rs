//! Classical Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over the material evaluation
//! from `varchess_core`. Root moves are shuffled so equal lines vary between
//! games.

mod search;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use varchess_core::{Board, Color, Engine, SearchResult};

pub use search::{minimax, pick_best_move, SearchOutcome, MATE_SCORE};

/// Minimax engine searching a fixed number of plies.
#[derive(Debug, Clone)]
pub struct ClassicalEngine<R = StdRng> {
    rng: R,
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine<StdRng> {
    pub fn new(depth: u8) -> Self {
        Self::with_rng(depth, StdRng::from_entropy())
    }

    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ClassicalEngine<R> {
    pub fn with_rng(depth: u8, rng: R) -> Self {
        Self {
            rng,
            depth,
            nodes: 0,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl<R: Rng + Send> Engine for ClassicalEngine<R> {
    fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        self.nodes = 0;

        let outcome = pick_best_move(board, side, self.depth, &mut self.rng, &mut self.nodes);
        let score = outcome.best_move.map(|(_, s)| s).unwrap_or(0);
        debug!(
            %side,
            depth = self.depth,
            nodes = self.nodes,
            score,
            "search finished"
        );

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score,
            depth: self.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
