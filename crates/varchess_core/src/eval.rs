use crate::{board::Board, types::*};

/// Material values indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [10, 30, 30, 50, 90, 900];

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Static material balance: positive favours white, negative favours black.
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, pc)| match pc.color {
            Color::White => piece_value(pc.kind),
            Color::Black => -piece_value(pc.kind),
        })
        .sum()
}

/// Total material owned by `color`, king included.
pub fn material(board: &Board, color: Color) -> i32 {
    board
        .pieces()
        .filter(|(_, pc)| pc.color == color)
        .map(|(_, pc)| piece_value(pc.kind))
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
