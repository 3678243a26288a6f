//! Check detection built on the movement rules.

use crate::board::Board;
use crate::rules::is_legal_geometry;
use crate::types::*;

/// Whether any piece of `by` could capture on `target`, which is expected to
/// hold a piece of the other side. Pawns only count diagonally.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, pc)| pc.color == by)
        .any(|(s, _)| is_legal_geometry(board, s, target, by))
}

/// Whether the king of `side` is attacked. A side without a king is never in check.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    match board.king_sq(side) {
        Some(ksq) => is_square_attacked(board, ksq, side.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
