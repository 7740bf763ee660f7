//! Core chess types: board representation, move generation, and game rules.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod game_state;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod square;
mod zobrist;

pub use board::{Board, PrettyBoard, STARTING_CODES};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, MoveText, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, GameError, SquareError};
pub use game_state::{DrawReason, FIFTY_MOVE_LIMIT, GameState, Outcome, REPETITION_LIMIT};
pub use movegen::{Check, CheckScan, LegalMoves, MoveGenerator, Pin};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::{Direction, Square};
pub use zobrist::position_key;
