//! Error types for square construction, board set-up and game operations.

use crate::color::Color;
use crate::square::Square;

/// Errors from building a [`Square`](crate::square::Square).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// A row or column lies outside `0..8`.
    #[error("square ({row}, {col}) is off the board")]
    InvalidSquare {
        /// The offending row.
        row: u8,
        /// The offending column.
        col: u8,
    },
    /// The text is not a square name like `e4`.
    #[error("invalid square name: \"{text}\"")]
    InvalidAlgebraic {
        /// The text that failed to parse.
        text: String,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A cell holds something other than a piece code or `--`.
    #[error("invalid piece code \"{code}\" at row {row}, col {col}")]
    InvalidPieceCode {
        /// The unrecognized code.
        code: String,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The en passant square does not follow a double pawn push by the
    /// side that just moved.
    #[error("invalid en passant square {square}")]
    InvalidEnPassant {
        /// The rejected square.
        square: Square,
    },
    /// The king of the side that just moved is attacked.
    #[error("{color} king is in check but it is not {color}'s move")]
    OpponentInCheck {
        /// Side whose king is attacked.
        color: Color,
    },
}

/// Errors from [`GameState`](crate::game_state::GameState) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The move is not in the current legal-move list.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The rejected move in coordinate notation.
        mv: String,
    },
    /// Move text is not of the form `e2e4` or `e7e8q`.
    #[error("invalid move text: \"{text}\"")]
    InvalidMoveText {
        /// The text that failed to parse.
        text: String,
    },
    /// A square could not be built.
    #[error(transparent)]
    Square(#[from] SquareError),
    /// The starting board failed validation.
    #[error(transparent)]
    Board(#[from] BoardError),
}
