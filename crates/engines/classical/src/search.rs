//! Minimax search with alpha-beta pruning

use rand::seq::SliceRandom;
use rand::Rng;
use varchess_core::{evaluate, is_in_check, legal_moves, Board, Color, Move};

/// Score of a mated side, white-positive like the evaluation.
pub const MATE_SCORE: i32 = 10_000;

/// Result from pick_best_move.
pub struct SearchOutcome {
    /// Best move found and its score (if any legal moves exist)
    pub best_move: Option<(Move, i32)>,
}

/// Searches the position and returns the best move for `side` with its score.
///
/// # Arguments
/// * `board` - The position to search
/// * `side` - Side to move; white maximises, black minimises
/// * `depth` - Search depth in plies, counting the root move
/// * `rng` - Shuffles root moves so that ties are broken at random
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// Every root move is searched with a fresh full window, and only a strictly
/// better score replaces the current best, so the first of several equal
/// moves in shuffled order wins.
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    depth: u8,
    rng: &mut R,
    nodes: &mut u64,
) -> SearchOutcome {
    let mut moves = legal_moves(board, side);
    if moves.is_empty() {
        return SearchOutcome { best_move: None };
    }
    moves.shuffle(rng);

    let mut best: Option<(Move, i32)> = None;
    let mut best_score = match side {
        Color::White => i32::MIN,
        Color::Black => i32::MAX,
    };

    for &mv in &moves {
        let score = minimax(
            &board.with_move(mv),
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            side.other(),
            nodes,
        );
        let better = match side {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if better {
            best_score = score;
            best = Some((mv, score));
        }
    }

    SearchOutcome {
        best_move: best.or(Some((moves[0], best_score))),
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Scores are from white's point of view. A mated white scores
/// `-MATE_SCORE`, a mated black `MATE_SCORE`, stalemate `0`. Children are
/// built without promotion.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    side: Color,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board);
    }

    let moves = legal_moves(board, side);
    if moves.is_empty() {
        if !is_in_check(board, side) {
            return 0;
        }
        return match side {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }

    match side {
        Color::White => {
            let mut best = i32::MIN;
            for mv in moves {
                let score = minimax(
                    &board.with_move(mv),
                    depth - 1,
                    alpha,
                    beta,
                    Color::Black,
                    nodes,
                );
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // Beta cutoff
                }
            }
            best
        }
        Color::Black => {
            let mut best = i32::MAX;
            for mv in moves {
                let score = minimax(
                    &board.with_move(mv),
                    depth - 1,
                    alpha,
                    beta,
                    Color::White,
                    nodes,
                );
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
            best
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
