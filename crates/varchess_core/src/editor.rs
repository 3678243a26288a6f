//! Position setup before a game starts.
//!
//! The editor starts from [`create_initial_board`] and only accepts
//! placements that keep both kings out of check.

use crate::{
    attacks::is_in_check,
    board::{create_initial_board, Board},
    error::{BoardError, EditError},
    game::Game,
    types::*,
};

#[derive(Clone, Debug)]
pub struct PositionEditor {
    board: Board,
}

impl PositionEditor {
    pub fn new(size: usize) -> Result<Self, EditError> {
        Ok(Self {
            board: create_initial_board(size)?,
        })
    }

    /// Wraps an existing board, e.g. one parsed from a layout.
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Discards the current setup and starts over on a `size`×`size` board.
    pub fn resize(&mut self, size: usize) -> Result<(), EditError> {
        self.board = create_initial_board(size)?;
        Ok(())
    }

    fn check_bounds(&self, square: Square) -> Result<(), EditError> {
        if self.board.contains(square) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                square,
                size: self.board.size(),
            }
            .into())
        }
    }

    /// Puts `piece` on `square`, replacing any non-king piece there.
    pub fn place(&mut self, square: Square, piece: Piece) -> Result<(), EditError> {
        self.check_bounds(square)?;
        if piece.kind == PieceKind::King {
            return Err(EditError::KingPlacement);
        }
        if matches!(self.board.piece_at(square), Some(pc) if pc.kind == PieceKind::King) {
            return Err(EditError::KingOccupied { square });
        }

        let mut next = self.board.clone();
        next.set_piece(square, Some(piece));
        let opponent = piece.color.other();
        if is_in_check(&next, opponent) {
            return Err(EditError::WouldCheck { color: opponent });
        }

        self.board = next;
        Ok(())
    }

    /// Clears `square` and returns what was on it.
    pub fn remove(&mut self, square: Square) -> Result<Option<Piece>, EditError> {
        self.check_bounds(square)?;
        if matches!(self.board.piece_at(square), Some(pc) if pc.kind == PieceKind::King) {
            return Err(EditError::KingRemoval { square });
        }
        Ok(self.board.set_piece(square, None))
    }

    /// Each side needs exactly one king, and the side that does not move
    /// first must not start in check.
    pub fn validate(&self, side_to_move: Color) -> Result<(), EditError> {
        for color in Color::BOTH {
            let found = self.board.count_pieces(PieceKind::King, color);
            if found != 1 {
                return Err(EditError::KingCount { color, found });
            }
        }
        let waiting = side_to_move.other();
        if is_in_check(&self.board, waiting) {
            return Err(EditError::InCheckAtStart { color: waiting });
        }
        Ok(())
    }

    pub fn into_game(self, side_to_move: Color) -> Result<Game, EditError> {
        self.validate(side_to_move)?;
        Ok(Game::new(self.board, side_to_move))
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod editor_tests;
