//! Piece movement geometry.
//!
//! Everything here is a pure query over a board snapshot. Malformed input
//! (empty origin, off-board squares, wrong side) answers `false`.

use crate::board::Board;
use crate::types::*;

/// Whether the piece of `side` on `from` may move to `to` by its movement
/// pattern alone. Does not consider whether the mover's king is left in check.
pub fn is_legal_geometry(board: &Board, from: Square, to: Square, side: Color) -> bool {
    if !board.contains(to) {
        return false;
    }
    let pc = match board.piece_at(from) {
        Some(p) if p.color == side => p,
        _ => return false,
    };
    let target = board.piece_at(to);
    if matches!(target, Some(t) if t.color == side) {
        return false;
    }

    let dr = to.row as i16 - from.row as i16;
    let dc = to.col as i16 - from.col as i16;
    let (ar, ac) = (dr.abs(), dc.abs());

    match pc.kind {
        PieceKind::Pawn => pawn_geometry(board, from, target, side, dr, dc),
        PieceKind::Rook => (dr == 0 || dc == 0) && path_clear(board, from, to),
        PieceKind::Bishop => ar == ac && path_clear(board, from, to),
        PieceKind::Queen => (dr == 0 || dc == 0 || ar == ac) && path_clear(board, from, to),
        PieceKind::Knight => (ar == 2 && ac == 1) || (ar == 1 && ac == 2),
        PieceKind::King => ar <= 1 && ac <= 1,
    }
}

fn pawn_geometry(
    board: &Board,
    from: Square,
    target: Option<Piece>,
    side: Color,
    dr: i16,
    dc: i16,
) -> bool {
    let dir = side.forward() as i16;

    // single step
    if dc == 0 && dr == dir {
        return target.is_none();
    }
    // diagonal capture; same-side targets were rejected by the caller
    if dc.abs() == 1 && dr == dir {
        return target.is_some();
    }
    // double step from the home row over an empty square
    if dc == 0 && dr == 2 * dir && from.row == board.pawn_home_row(side) {
        let passed = from.offset(side.forward(), 0, board.size());
        return target.is_none() && passed.is_some_and(|s| board.piece_at(s).is_none());
    }
    false
}

/// Whether every square strictly between `from` and `to` is empty. Only
/// meaningful when both lie on a common row, column or diagonal.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_r = (to.row as i8 - from.row as i8).signum();
    let step_c = (to.col as i8 - from.col as i8).signum();
    if step_r == 0 && step_c == 0 {
        return true;
    }

    let mut cur = from;
    loop {
        cur = match cur.offset(step_r, step_c, board.size()) {
            Some(s) => s,
            None => return false,
        };
        if cur == to {
            return true;
        }
        if board.piece_at(cur).is_some() {
            return false;
        }
    }
}

/// Geometric legality plus self-check exclusion: the move is playable by
/// `side` and does not leave its own king attacked.
pub fn is_legal_move(board: &Board, from: Square, to: Square, side: Color) -> bool {
    is_legal_geometry(board, from, to, side)
        && !board.with_move(Move::new(from, to)).in_check(side)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
