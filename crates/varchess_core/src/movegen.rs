use crate::{attacks::is_in_check, board::Board, rules::is_legal_geometry, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Generate all legal moves for `side`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// A move is kept only if the board after it (no promotion applied) leaves
/// the king of `side` unattacked.
pub fn legal_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(board, side, out);
    out.retain(|&mv| !is_in_check(&board.with_move(mv), side));
}

pub fn has_legal_moves(board: &Board, side: Color) -> bool {
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(board, side, &mut pseudo);
    pseudo
        .into_iter()
        .any(|mv| !is_in_check(&board.with_move(mv), side))
}

/// Legal destinations of the piece on `from`; empty unless it belongs to `side`.
pub fn legal_destinations(board: &Board, from: Square, side: Color) -> Vec<Square> {
    let mut pseudo = Vec::with_capacity(32);
    match board.piece_at(from) {
        Some(pc) if pc.color == side => gen_piece(board, from, pc, &mut pseudo),
        _ => return Vec::new(),
    }
    pseudo
        .into_iter()
        .filter(|&mv| !is_in_check(&board.with_move(mv), side))
        .map(|mv| mv.to)
        .collect()
}

/// Moves that satisfy the movement rules, before self-check exclusion.
fn pseudo_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for (from, pc) in board.pieces() {
        if pc.color == side {
            gen_piece(board, from, pc, out);
        }
    }
}

fn gen_piece(board: &Board, from: Square, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_DELTAS, out),
        PieceKind::King => gen_steps(board, from, pc.color, &KING_DELTAS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &DIAGONALS, out);
            gen_slider(board, from, pc.color, &ORTHOGONALS, out);
        }
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();
    let candidates = [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)];
    for (dr, dc) in candidates {
        if let Some(to) = from.offset(dr, dc, board.size()) {
            if is_legal_geometry(board, from, to, c) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc, board.size()) {
            match board.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc, board.size()) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
