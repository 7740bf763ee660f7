//! Material balance evaluation.
//!
//! Counts weighted piece material for each side.
//! All scores are returned from White's perspective (positive = White ahead).

use rookery_core::{Board, Color, PieceKind};

/// Material values in pawns, indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   | 1     |
/// | Knight | 3     |
/// | Bishop | 3     |
/// | Rook   | 5     |
/// | Queen  | 9     |
/// | King   | 0     |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    1, // Pawn
    3, // Knight
    3, // Bishop
    5, // Rook
    9, // Queen
    0, // King
];

/// Value of a single piece kind.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}

/// Evaluate material balance from White's perspective.
pub fn material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.color() {
            Color::White => piece_value(piece.kind()),
            Color::Black => -piece_value(piece.kind()),
        })
        .sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
