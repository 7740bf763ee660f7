//! Board squares addressed by `(row, col)` and the unit directions between them.
//!
//! Row 0 is rank 8 and row 7 is rank 1, so White's pieces start on rows 6-7.
//! Column 0 is the a-file.

use std::fmt;

use crate::error::SquareError;

/// A square on the chess board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    pub const A1: Square = Square::at(7, 0);
    pub const C1: Square = Square::at(7, 2);
    pub const D1: Square = Square::at(7, 3);
    pub const E1: Square = Square::at(7, 4);
    pub const F1: Square = Square::at(7, 5);
    pub const G1: Square = Square::at(7, 6);
    pub const H1: Square = Square::at(7, 7);
    pub const A8: Square = Square::at(0, 0);
    pub const C8: Square = Square::at(0, 2);
    pub const D8: Square = Square::at(0, 3);
    pub const E8: Square = Square::at(0, 4);
    pub const F8: Square = Square::at(0, 5);
    pub const G8: Square = Square::at(0, 6);
    pub const H8: Square = Square::at(0, 7);

    /// Create a square, rejecting coordinates outside `0..8`.
    pub const fn new(row: u8, col: u8) -> Result<Square, SquareError> {
        if row < 8 && col < 8 {
            Ok(Square { row, col })
        } else {
            Err(SquareError::InvalidSquare { row, col })
        }
    }

    /// Create a square from coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Create a square from a zero-based row-major index (0 = a8, 63 = h1).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square::at((index / 8) as u8, (index % 8) as u8))
        } else {
            None
        }
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::InvalidAlgebraic { text: s.to_string() };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square::at(b'8' - rank, file - b'a'))
    }

    /// Return the row (0 = rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Return the column (0 = a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the zero-based row-major index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Step `steps` times along `dir`, returning `None` once off the board.
    #[inline]
    pub const fn offset(self, dir: Direction, steps: i8) -> Option<Square> {
        let row = self.row as i8 + dir.dr * steps;
        let col = self.col as i8 + dir.dc * steps;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|i| Square::at((i / 8) as u8, (i % 8) as u8))
    }

    /// Return the algebraic file letter.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Return the algebraic rank digit.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

/// A `(row, col)` step between neighbouring squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const UP: Direction = Direction::new(-1, 0);
    pub const LEFT: Direction = Direction::new(0, -1);
    pub const DOWN: Direction = Direction::new(1, 0);
    pub const RIGHT: Direction = Direction::new(0, 1);
    pub const UP_LEFT: Direction = Direction::new(-1, -1);
    pub const UP_RIGHT: Direction = Direction::new(-1, 1);
    pub const DOWN_LEFT: Direction = Direction::new(1, -1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, 1);

    /// Rank and file directions.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::UP, Direction::LEFT, Direction::DOWN, Direction::RIGHT];

    /// Diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    /// The eight knight jumps.
    pub const KNIGHT_JUMPS: [Direction; 8] = [
        Direction::new(-2, -1),
        Direction::new(-2, 1),
        Direction::new(-1, -2),
        Direction::new(-1, 2),
        Direction::new(1, -2),
        Direction::new(1, 2),
        Direction::new(2, -1),
        Direction::new(2, 1),
    ];

    /// The eight king steps.
    pub const KING_STEPS: [Direction; 8] = [
        Direction::UP_LEFT,
        Direction::UP,
        Direction::UP_RIGHT,
        Direction::LEFT,
        Direction::RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN,
        Direction::DOWN_RIGHT,
    ];

    #[inline]
    pub const fn new(dr: i8, dc: i8) -> Direction {
        Direction { dr, dc }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Direction {
        Direction::new(-self.dr, -self.dc)
    }

    /// Return `true` for rank/file directions.
    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.dr == 0) != (self.dc == 0)
    }

    /// Return `true` if `self` lies on the same line as `other` (either way).
    #[inline]
    pub fn is_parallel(self, other: Direction) -> bool {
        self == other || self == other.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Square};
    use crate::error::SquareError;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(Square::new(8, 0), Err(SquareError::InvalidSquare { row: 8, col: 0 }));
        assert_eq!(Square::new(3, 200), Err(SquareError::InvalidSquare { row: 3, col: 200 }));
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Ok(Square::A1));
        assert_eq!(Square::from_algebraic("h8"), Ok(Square::H8));
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!((e4.row(), e4.col()), (4, 4));
        assert_eq!(e4.to_string(), "e4");
        assert_eq!(Square::E1.to_string(), "e1");
        assert_eq!(Square::E8.to_string(), "e8");
    }

    #[test]
    fn algebraic_invalid() {
        for bad in ["i1", "a9", "", "a", "a1b", "E4"] {
            assert!(Square::from_algebraic(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::A8.offset(Direction::UP, 1), None);
        assert_eq!(Square::A8.offset(Direction::DOWN_RIGHT, 7), Some(Square::H1));
        assert_eq!(Square::E1.offset(Direction::RIGHT, 2), Some(Square::G1));
        assert_eq!(Square::H1.offset(Direction::RIGHT, 1), None);
    }

    #[test]
    fn index_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), Some(sq));
        }
        assert_eq!(Square::all().count(), Square::COUNT);
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn direction_helpers() {
        assert!(Direction::UP.is_orthogonal());
        assert!(!Direction::UP_LEFT.is_orthogonal());
        assert!(Direction::UP.is_parallel(Direction::DOWN));
        assert!(!Direction::UP.is_parallel(Direction::LEFT));
        assert_eq!(Direction::DOWN_LEFT.reverse(), Direction::UP_RIGHT);
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::G8), "Square(g8)");
    }
}
