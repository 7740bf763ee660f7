//! Move values and coordinate move text.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::GameError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a chess move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Promotion,
    EnPassant,
    Castling,
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    /// All promotion pieces.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Interpret a promotion choice letter (case-insensitive).
    ///
    /// `R`, `B` and `N` select those pieces; any other character selects a queen.
    pub const fn from_choice(choice: char) -> PromotionPiece {
        match choice.to_ascii_uppercase() {
            'R' => PromotionPiece::Rook,
            'B' => PromotionPiece::Bishop,
            'N' => PromotionPiece::Knight,
            _ => PromotionPiece::Queen,
        }
    }

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Lowercase letter used as the fifth character of move text.
    pub const fn text_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }
}

/// A single board transition.
///
/// Carries the pieces involved and the special-move kind, but two moves are
/// equal (and hash equally) whenever their start and end squares match. This
/// lets a move built from user input find its fully-flagged twin in a legal
/// move list.
#[derive(Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Create a move.
    pub const fn new(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        kind: MoveKind,
    ) -> Move {
        Move {
            start,
            end,
            piece_moved,
            piece_captured,
            kind,
        }
    }

    /// Start square.
    #[inline]
    pub const fn start(self) -> Square {
        self.start
    }

    /// End square.
    #[inline]
    pub const fn end(self) -> Square {
        self.end
    }

    /// The piece being moved.
    #[inline]
    pub const fn piece_moved(self) -> Piece {
        self.piece_moved
    }

    /// The piece removed by this move, including the pawn taken en passant.
    #[inline]
    pub const fn piece_captured(self) -> Option<Piece> {
        self.piece_captured
    }

    /// The special-move kind.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_pawn_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion)
    }

    #[inline]
    pub const fn is_enpassant_move(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle_move(self) -> bool {
        matches!(self.kind, MoveKind::Castling)
    }

    /// Return `true` if a piece is removed from the board.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the pawn removed by an en passant capture.
    ///
    /// It shares the start square's row and the end square's column.
    #[inline]
    pub const fn enpassant_victim_square(self) -> Square {
        Square::at(self.start.row(), self.end.col())
    }

    /// Coordinate text of the transition, e.g. `"e2e4"`.
    pub fn text(self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {} kind={:?})", self, self.piece_moved, self.kind)
    }
}

/// Parsed coordinate move text: `e2e4`, optionally followed by a promotion letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PromotionPiece>,
}

impl FromStr for MoveText {
    type Err = GameError;

    fn from_str(s: &str) -> Result<MoveText, GameError> {
        let invalid = || GameError::InvalidMoveText { text: s.to_string() };
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }
        let start = Square::from_algebraic(&s[0..2]).map_err(|_| invalid())?;
        let end = Square::from_algebraic(&s[2..4]).map_err(|_| invalid())?;
        let promotion = s[4..].chars().next().map(PromotionPiece::from_choice);
        Ok(MoveText {
            start,
            end,
            promotion,
        })
    }
}
