//! Colored chess piece and its two-character square code.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct colored pieces.
    pub const COUNT: usize = 12;

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Code of an empty square.
    pub const EMPTY_CODE: &'static str = "--";

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Parse a two-character square code such as `"wp"` or `"bQ"`.
    ///
    /// Returns `None` for the empty sentinel and for anything malformed.
    pub fn from_code(code: &str) -> Option<Piece> {
        let mut chars = code.chars();
        let color = Color::from_code_char(chars.next()?)?;
        let kind = PieceKind::from_code_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the color (bit 3).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Return a contiguous index 0-11: White pieces 0-5, Black pieces 6-11.
    #[inline]
    pub const fn index(self) -> usize {
        let color_bit = (self.0 >> 3) as usize;
        let kind_bits = (self.0 & 0x07) as usize;
        color_bit * 6 + kind_bits
    }

    /// Return `true` if this piece is `kind` of `color`.
    #[inline]
    pub const fn is(self, kind: PieceKind, color: Color) -> bool {
        self.0 == Piece::new(kind, color).0
    }

    /// Return the two-character square code, e.g. `"wK"`.
    pub fn code(self) -> String {
        format!("{}{}", self.color().code_char(), self.kind().code_char())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color().code_char(), self.kind().code_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind, "kind mismatch for {color:?} {kind:?}");
                assert_eq!(piece.color(), color, "color mismatch for {color:?} {kind:?}");
                assert!(piece.is(kind, color));
            }
        }
    }

    #[test]
    fn index_contiguity() {
        let mut seen = [false; Piece::COUNT];
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let idx = Piece::new(kind, color).index();
                assert!(!seen[idx], "duplicate index {idx}");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn codes() {
        assert_eq!(Piece::WHITE_PAWN.code(), "wp");
        assert_eq!(Piece::BLACK_KING.code(), "bK");
        assert_eq!(Piece::from_code("bN"), Some(Piece::BLACK_KNIGHT));
        assert_eq!(Piece::from_code("wQ"), Some(Piece::WHITE_QUEEN));
    }

    #[test]
    fn rejects_bad_codes() {
        assert_eq!(Piece::from_code(Piece::EMPTY_CODE), None);
        assert_eq!(Piece::from_code("wP"), None);
        assert_eq!(Piece::from_code("xK"), None);
        assert_eq!(Piece::from_code("wKK"), None);
        assert_eq!(Piece::from_code("w"), None);
        assert_eq!(Piece::from_code(""), None);
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(format!("{}", Piece::BLACK_ROOK), "bR");
        assert_eq!(format!("{:?}", Piece::WHITE_BISHOP), "Piece(wB)");
    }
}
