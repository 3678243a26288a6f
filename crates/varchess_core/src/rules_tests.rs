use super::*;

fn white(kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(Color::White, kind))
}

fn black(kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(Color::Black, kind))
}

#[test]
fn test_pawn_double_step_from_home_row() {
    let mut board = Board::initial(8).unwrap();
    board.set_piece(sq(6, 3), white(PieceKind::Pawn));
    assert!(is_legal_geometry(&board, sq(6, 3), sq(4, 3), Color::White));

    board.set_piece(sq(5, 3), black(PieceKind::Knight));
    assert!(!is_legal_geometry(&board, sq(6, 3), sq(4, 3), Color::White));
}

#[test]
fn test_pawn_double_step_blocked_on_destination() {
    let mut board = Board::initial(8).unwrap();
    board.set_piece(sq(6, 3), white(PieceKind::Pawn));
    board.set_piece(sq(4, 3), black(PieceKind::Rook));
    assert!(!is_legal_geometry(&board, sq(6, 3), sq(4, 3), Color::White));
}

#[test]
fn test_pawn_double_step_only_from_home_row() {
    let mut board = Board::initial(8).unwrap();
    board.set_piece(sq(5, 2), white(PieceKind::Pawn));
    assert!(!is_legal_geometry(&board, sq(5, 2), sq(3, 2), Color::White));

    board.set_piece(sq(1, 4), black(PieceKind::Pawn));
    assert!(is_legal_geometry(&board, sq(1, 4), sq(3, 4), Color::Black));
}

#[test]
fn test_home_row_follows_board_size() {
    // On 5x5 the white home row is 3, on 10x10 it is 8.
    let mut small = Board::initial(5).unwrap();
    small.set_piece(sq(3, 0), white(PieceKind::Pawn));
    assert!(is_legal_geometry(&small, sq(3, 0), sq(1, 0), Color::White));

    let mut large = Board::initial(10).unwrap();
    large.set_piece(sq(8, 0), white(PieceKind::Pawn));
    large.set_piece(sq(1, 9), black(PieceKind::Pawn));
    assert!(is_legal_geometry(&large, sq(8, 0), sq(6, 0), Color::White));
    assert!(is_legal_geometry(&large, sq(1, 9), sq(3, 9), Color::Black));
}

#[test]
fn test_pawn_forward_and_capture() {
    let board = Board::from_layout("2k2/5/1r1n1/2P2/2K2").unwrap();
    let from = sq(3, 2);
    assert!(is_legal_geometry(&board, from, sq(2, 2), Color::White));
    assert!(is_legal_geometry(&board, from, sq(2, 1), Color::White));
    assert!(is_legal_geometry(&board, from, sq(2, 3), Color::White));
    // no diagonal step onto an empty square, no backwards or sideways moves
    let empty_diag = Board::from_layout("2k2/5/5/2P2/2K2").unwrap();
    assert!(!is_legal_geometry(&empty_diag, from, sq(2, 1), Color::White));
    assert!(!is_legal_geometry(&board, from, sq(4, 3), Color::White));
    assert!(!is_legal_geometry(&board, from, sq(3, 3), Color::White));
}

#[test]
fn test_pawn_cannot_capture_forward() {
    let board = Board::from_layout("2k2/5/2n2/2P2/2K2").unwrap();
    assert!(!is_legal_geometry(&board, sq(3, 2), sq(2, 2), Color::White));
}

#[test]
fn test_black_pawn_moves_down() {
    let board = Board::from_layout("2k2/1p3/2R2/5/2K2").unwrap();
    assert!(is_legal_geometry(&board, sq(1, 1), sq(2, 1), Color::Black));
    assert!(is_legal_geometry(&board, sq(1, 1), sq(2, 2), Color::Black));
    assert!(!is_legal_geometry(&board, sq(1, 1), sq(0, 1), Color::Black));
}

#[test]
fn test_rook_paths() {
    let board = Board::from_layout("2k2/5/R1p2/5/2K2").unwrap();
    assert!(is_legal_geometry(&board, sq(2, 0), sq(2, 1), Color::White));
    assert!(is_legal_geometry(&board, sq(2, 0), sq(2, 2), Color::White));
    assert!(!is_legal_geometry(&board, sq(2, 0), sq(2, 3), Color::White));
    assert!(is_legal_geometry(&board, sq(2, 0), sq(0, 0), Color::White));
    assert!(!is_legal_geometry(&board, sq(2, 0), sq(3, 1), Color::White));
}

#[test]
fn test_bishop_and_queen_paths() {
    let board = Board::from_layout("2k2/5/2B2/1p3/Q1K2").unwrap();
    assert!(is_legal_geometry(&board, sq(2, 2), sq(0, 0), Color::White));
    assert!(is_legal_geometry(&board, sq(2, 2), sq(3, 1), Color::White));
    assert!(!is_legal_geometry(&board, sq(2, 2), sq(2, 4), Color::White));
    // queen on (4,0): diagonal blocked by the pawn on (3,1)
    assert!(is_legal_geometry(&board, sq(4, 0), sq(3, 1), Color::White));
    assert!(!is_legal_geometry(&board, sq(4, 0), sq(1, 3), Color::White));
    assert!(is_legal_geometry(&board, sq(4, 0), sq(0, 0), Color::White));
    assert!(!is_legal_geometry(&board, sq(4, 0), sq(4, 3), Color::White));
    assert!(!is_legal_geometry(&board, sq(4, 0), sq(2, 1), Color::White));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::from_layout("2k2/5/PPP2/PNP2/PPK2").unwrap();
    assert!(is_legal_geometry(&board, sq(3, 1), sq(1, 0), Color::White));
    assert!(is_legal_geometry(&board, sq(3, 1), sq(1, 2), Color::White));
    assert!(is_legal_geometry(&board, sq(3, 1), sq(2, 3), Color::White));
    assert!(!is_legal_geometry(&board, sq(3, 1), sq(1, 1), Color::White));
}

#[test]
fn test_king_single_step() {
    let board = Board::initial(7).unwrap();
    let k = sq(6, 3);
    assert!(is_legal_geometry(&board, k, sq(5, 2), Color::White));
    assert!(is_legal_geometry(&board, k, sq(6, 4), Color::White));
    assert!(!is_legal_geometry(&board, k, sq(4, 3), Color::White));
    assert!(!is_legal_geometry(&board, k, sq(6, 1), Color::White));
}

#[test]
fn test_malformed_queries_answer_false() {
    let board = Board::from_layout("2k2/5/5/2R2/2K2").unwrap();
    // empty origin
    assert!(!is_legal_geometry(&board, sq(1, 1), sq(2, 1), Color::White));
    // wrong side
    assert!(!is_legal_geometry(&board, sq(3, 2), sq(2, 2), Color::Black));
    // own piece on target
    assert!(!is_legal_geometry(&board, sq(3, 2), sq(4, 2), Color::White));
    // off-board squares
    assert!(!is_legal_geometry(&board, sq(3, 2), sq(3, 7), Color::White));
    assert!(!is_legal_geometry(&board, sq(9, 9), sq(3, 2), Color::White));
    // null move
    assert!(!is_legal_geometry(&board, sq(3, 2), sq(3, 2), Color::White));
}

#[test]
fn test_is_legal_move_excludes_self_check() {
    // the white rook is pinned against its king by the black rook
    let board = Board::from_layout("2r2/5/5/2R2/2K2").unwrap();
    assert!(is_legal_geometry(&board, sq(3, 2), sq(3, 0), Color::White));
    assert!(!is_legal_move(&board, sq(3, 2), sq(3, 0), Color::White));
    assert!(is_legal_move(&board, sq(3, 2), sq(1, 2), Color::White));
    assert!(is_legal_move(&board, sq(3, 2), sq(0, 2), Color::White));
}
