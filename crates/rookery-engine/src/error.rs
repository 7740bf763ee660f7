//! Errors raised while selecting a move.

use rookery_core::GameError;

/// Errors from the move-selection strategies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The side to move has no legal moves.
    #[error("no legal moves to choose from")]
    NoLegalMoves,
    /// Exploring a line made or undid a move the game state rejected.
    #[error(transparent)]
    Game(#[from] GameError),
}
