pub mod attacks;
pub mod board;
pub mod editor;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use editor::PositionEditor;
pub use error::*;
pub use eval::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-selection policy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The move chosen (None if no legal moves)
    pub best_move: Option<Move>,
    /// Material score of the chosen line, positive favours white
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

/// Trait that all move-selection policies implement.
///
/// This allows swapping between random, capture-greedy and minimax
/// players behind one interface.
pub trait Engine: Send {
    /// Choose a move for `side` on `board`.
    ///
    /// # Returns
    /// SearchResult containing the chosen move and statistics; `best_move`
    /// is `None` only when `side` has no legal move.
    fn search(&mut self, board: &Board, side: Color) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "varchess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        (**self).search(board, side)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn author(&self) -> &str {
        (**self).author()
    }

    fn new_game(&mut self) {
        (**self).new_game()
    }
}
