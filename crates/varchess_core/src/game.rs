//! Turn control: committing moves, promotion, side alternation and
//! checkmate / stalemate detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    attacks::is_in_check,
    board::Board,
    error::GameError,
    movegen::{has_legal_moves, legal_destinations, legal_moves},
    rules::is_legal_move,
    types::*,
};

/// State of a game as seen by the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Outcome of the position for `side_to_move`.
pub fn outcome(board: &Board, side_to_move: Color) -> Outcome {
    if has_legal_moves(board, side_to_move) {
        Outcome::InProgress
    } else if is_in_check(board, side_to_move) {
        Outcome::Checkmate {
            winner: side_to_move.other(),
        }
    } else {
        Outcome::Stalemate
    }
}

/// Plays `mv` on `board` and promotes a pawn that lands on its far row to a
/// queen. Returns the captured piece. Legality is not checked here.
pub fn commit_move(board: &mut Board, mv: Move) -> Option<Piece> {
    let captured = board.move_piece(mv);
    if let Some(pc) = board.piece_at(mv.to) {
        if pc.kind == PieceKind::Pawn && mv.to.row == board.promotion_row(pc.color) {
            board.set_piece(mv.to, Some(Piece::new(pc.color, PieceKind::Queen)));
        }
    }
    captured
}

/// A running game: the current board, whose turn it is and the derived outcome.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    outcome: Outcome,
    plies: u32,
}

impl Game {
    pub fn new(board: Board, side_to_move: Color) -> Self {
        let outcome = outcome(&board, side_to_move);
        Self {
            board,
            side_to_move,
            outcome,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn ply_count(&self) -> u32 {
        self.plies
    }

    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.outcome.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.side_to_move)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.board, from, self.side_to_move)
    }

    /// Commits `mv` for the side to move, then hands the turn over and
    /// recomputes the outcome for the new side.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver);
        }
        if !is_legal_move(&self.board, mv.from, mv.to, self.side_to_move) {
            return Err(GameError::IllegalMove {
                mv,
                side: self.side_to_move,
            });
        }

        let captured = commit_move(&mut self.board, mv);
        debug!(side = %self.side_to_move, %mv, ?captured, "move committed");

        self.side_to_move = self.side_to_move.other();
        self.plies += 1;
        self.outcome = outcome(&self.board, self.side_to_move);
        if self.outcome.is_over() {
            debug!(outcome = ?self.outcome, plies = self.plies, "game finished");
        }
        Ok(self.outcome)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
