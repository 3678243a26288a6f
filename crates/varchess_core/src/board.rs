use std::fmt;

use crate::error::BoardError;
use crate::types::*;

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 10;
const CELLS: usize = MAX_SIZE * MAX_SIZE;

/// An N×N grid of optional pieces, 5 ≤ N ≤ 10.
///
/// Storage is a fixed array with a stride of `MAX_SIZE`, so cloning a board
/// never allocates. Squares beyond `size` are always empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
    size: u8,
}

/// Empty board with one king per side on the middle column of the edge rows.
pub fn create_initial_board(size: usize) -> Result<Board, BoardError> {
    Board::initial(size)
}

impl Board {
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Board {
            cells: [None; CELLS],
            size: size as u8,
        })
    }

    pub fn initial(size: usize) -> Result<Self, BoardError> {
        let mut board = Board::empty(size)?;
        let mid = (size / 2) as u8;
        let last = (size - 1) as u8;
        board.set_piece(
            Square::new(0, mid),
            Some(Piece::new(Color::Black, PieceKind::King)),
        );
        board.set_piece(
            Square::new(last, mid),
            Some(Piece::new(Color::White, PieceKind::King)),
        );
        Ok(board)
    }

    /// Parses a FEN-like placement: rows from row 0 downwards separated by
    /// `/`, uppercase letters for white, lowercase for black and decimal
    /// numbers for runs of empty squares (`10` is a full empty row on the
    /// largest board). The number of rows fixes the board size.
    pub fn from_layout(layout: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        let mut board = Board::empty(rows.len())?;
        let size = rows.len();

        for (r, row) in rows.iter().enumerate() {
            let mut col = 0usize;
            let mut run = 0usize;
            for ch in row.chars() {
                if let Some(d) = ch.to_digit(10) {
                    run = run * 10 + d as usize;
                    // stop before a long digit run can grow without bound
                    if col + run > size {
                        return Err(BoardError::RowWidth {
                            row: r,
                            expected: size,
                            found: col + run,
                        });
                    }
                    continue;
                }
                col += std::mem::take(&mut run);
                let pc = Piece::from_symbol(ch).ok_or(BoardError::UnknownSymbol { symbol: ch })?;
                if col >= size {
                    return Err(BoardError::RowWidth {
                        row: r,
                        expected: size,
                        found: col + 1,
                    });
                }
                board.set_piece(Square::new(r as u8, col as u8), Some(pc));
                col += 1;
            }
            col += run;
            if col != size {
                return Err(BoardError::RowWidth {
                    row: r,
                    expected: size,
                    found: col,
                });
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_layout`].
    pub fn layout(&self) -> String {
        let mut out = String::new();
        for r in 0..self.size {
            if r > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for c in 0..self.size {
                match self.piece_at(Square::new(r, c)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, sq: Square) -> bool {
        sq.row < self.size && sq.col < self.size
    }

    fn index(&self, sq: Square) -> Option<usize> {
        self.contains(sq)
            .then(|| sq.row as usize * MAX_SIZE + sq.col as usize)
    }

    /// Piece on `sq`; `None` for empty or off-board squares.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.index(sq).and_then(|i| self.cells[i])
    }

    /// Puts `pc` on `sq` and returns what was there. Off-board writes are ignored.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) -> Option<Piece> {
        match self.index(sq) {
            Some(i) => std::mem::replace(&mut self.cells[i], pc),
            None => None,
        }
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| Square::new(r, c)))
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares()
            .filter_map(move |s| self.piece_at(s).map(|pc| (s, pc)))
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    pub fn count_pieces(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces()
            .filter(|(_, pc)| pc.kind == kind && pc.color == color)
            .count()
    }

    /// Row a pawn of `c` may double-step from.
    pub fn pawn_home_row(&self, c: Color) -> u8 {
        match c {
            Color::White => self.size - 2,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of `c` promotes.
    pub fn promotion_row(&self, c: Color) -> u8 {
        match c {
            Color::White => 0,
            Color::Black => self.size - 1,
        }
    }

    /// Moves the piece on `mv.from` to `mv.to` without any promotion and
    /// returns the captured piece. Does nothing if `from` is empty.
    pub fn move_piece(&mut self, mv: Move) -> Option<Piece> {
        if !self.contains(mv.to) {
            return None;
        }
        match self.set_piece(mv.from, None) {
            Some(moved) => self.set_piece(mv.to, Some(moved)),
            None => None,
        }
    }

    /// Copy of this board with `mv` played, promotion not applied.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.move_piece(mv);
        next
    }

    pub fn in_check(&self, c: Color) -> bool {
        crate::attacks::is_in_check(self, c)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.layout())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            write!(f, "{r:>2} ")?;
            for c in 0..self.size {
                let ch = self
                    .piece_at(Square::new(r, c))
                    .map(|pc| pc.symbol())
                    .unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
