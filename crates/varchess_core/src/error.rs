//! Error types for board construction, position editing and move commits.
//!
//! Rule queries never fail: they answer `false`, `None` or an empty list.
//! These errors are reserved for commands that reject their input.

use thiserror::Error;

use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::types::{Color, Move, Square};

/// Errors raised while building a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {size} is outside {}..={}", MIN_SIZE, MAX_SIZE)]
    InvalidSize { size: usize },

    #[error("square {square} is outside a {size}x{size} board")]
    OutOfBounds { square: Square, size: u8 },

    #[error("layout row {row} covers {found} squares, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown piece symbol '{symbol}' in layout")]
    UnknownSymbol { symbol: char },

    #[error("unknown color '{name}', expected white or black")]
    UnknownColor { name: String },
}

/// Errors raised by the position editor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("kings are placed automatically and cannot be added")]
    KingPlacement,

    #[error("the king on {square} cannot be replaced")]
    KingOccupied { square: Square },

    #[error("the king on {square} cannot be removed")]
    KingRemoval { square: Square },

    #[error("placement would put the {color} king in check")]
    WouldCheck { color: Color },

    #[error("the {color} king must not be in check before the game starts")]
    InCheckAtStart { color: Color },

    #[error("{color} must have exactly one king, found {found}")]
    KingCount { color: Color, found: usize },
}

/// Errors raised when committing a move to a running game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("{mv} is not a legal move for {side}")]
    IllegalMove { mv: Move, side: Color },
}
