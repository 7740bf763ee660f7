//! The 8×8 piece grid.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement, indexed `[row][col]` with row 0 = rank 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

/// Square codes of the standard starting position.
pub const STARTING_CODES: [[&str; 8]; 8] = [
    ["bR", "bN", "bB", "bQ", "bK", "bB", "bN", "bR"],
    ["bp", "bp", "bp", "bp", "bp", "bp", "bp", "bp"],
    ["--", "--", "--", "--", "--", "--", "--", "--"],
    ["--", "--", "--", "--", "--", "--", "--", "--"],
    ["--", "--", "--", "--", "--", "--", "--", "--"],
    ["--", "--", "--", "--", "--", "--", "--", "--"],
    ["wp", "wp", "wp", "wp", "wp", "wp", "wp", "wp"],
    ["wR", "wN", "wB", "wQ", "wK", "wB", "wN", "wR"],
];

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::ALL {
            for (col, kind) in back.into_iter().enumerate() {
                board.cells[color.back_row() as usize][col] = Some(Piece::new(kind, color));
                board.cells[color.pawn_start_row() as usize][col] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Build a board from an 8×8 grid of square codes (`"wK"`, `"--"`, ...).
    ///
    /// Only the codes are checked; see [`Board::validate`] for structural rules.
    pub fn from_codes(codes: &[[&str; 8]; 8]) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (row, line) in codes.iter().enumerate() {
            for (col, &code) in line.iter().enumerate() {
                if code == Piece::EMPTY_CODE {
                    continue;
                }
                let piece = Piece::from_code(code).ok_or_else(|| BoardError::InvalidPieceCode {
                    code: code.to_string(),
                    row,
                    col,
                })?;
                board.cells[row][col] = Some(piece);
            }
        }
        Ok(board)
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Return `true` if `sq` is empty.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Overwrite the contents of `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Empty `sq`, returning what stood there.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Iterate over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Locate the king of `color` by scanning the grid.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece.is(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }

    /// Snapshot the grid as square codes, row 0 = rank 8.
    pub fn codes(&self) -> [[String; 8]; 8] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| match self.cells[row][col] {
                Some(piece) => piece.code(),
                None => Piece::EMPTY_CODE.to_string(),
            })
        })
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces()
                .filter(|&(_, piece)| piece.is(PieceKind::King, color))
                .count();
            if count != 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount {
                    color: color_name,
                    count,
                });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        for row in self.codes() {
            writeln!(f, "  {}", row.join(" "))?;
        }
        write!(f, ")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid of square codes.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.0.codes().iter().enumerate() {
            writeln!(f, "{}  {}", 8 - row, line.join(" "))?;
        }
        write!(f, "   a  b  c  d  e  f  g  h")
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, STARTING_CODES};
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_matches_codes() {
        let board = Board::starting_position();
        assert_eq!(Board::from_codes(&STARTING_CODES).unwrap(), board);
        board.validate().unwrap();
    }

    #[test]
    fn starting_position_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(Square::D8), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_at(Square::A1), Some(Piece::WHITE_ROOK));
        assert!(board.is_empty(Square::new(4, 4).unwrap()));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn find_king() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(Color::White), Some(Square::E1));
        assert_eq!(board.find_king(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn codes_roundtrip() {
        let board = Board::starting_position();
        let codes = board.codes();
        assert_eq!(codes[0][4], "bK");
        assert_eq!(codes[7][3], "wQ");
        assert_eq!(codes[4][0], "--");
    }

    #[test]
    fn from_codes_rejects_unknown() {
        let mut codes = STARTING_CODES;
        codes[3][3] = "xx";
        assert_eq!(
            Board::from_codes(&codes),
            Err(BoardError::InvalidPieceCode {
                code: "xx".to_string(),
                row: 3,
                col: 3
            })
        );
    }

    #[test]
    fn validate_king_count() {
        let mut board = Board::starting_position();
        board.take(Square::E8);
        assert!(matches!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: "black", count: 0 })
        ));
    }

    #[test]
    fn validate_back_rank_pawns() {
        let mut board = Board::starting_position();
        board.set(Square::D8, Some(Piece::WHITE_PAWN));
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }

    #[test]
    fn set_and_take() {
        let mut board = Board::empty();
        let sq = Square::new(3, 3).unwrap();
        board.set(sq, Some(Piece::BLACK_ROOK));
        assert_eq!(board.piece_at(sq), Some(Piece::BLACK_ROOK));
        assert_eq!(board.take(sq), Some(Piece::BLACK_ROOK));
        assert!(board.is_empty(sq));
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        assert!(output.contains("8  bR bN bB bQ bK bB bN bR"));
        assert!(output.contains("1  wR wN wB wQ wK wB wN wR"));
        assert!(output.contains("a  b  c"));
    }
}
