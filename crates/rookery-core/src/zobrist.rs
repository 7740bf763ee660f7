//! Zobrist keys identifying positions in the repetition table.
//!
//! A key covers piece placement, side to move, castling rights and the en
//! passant square's file.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::square::Square;

const PIECE_SQUARE_KEYS: usize = 12 * 64;
const SIDE_KEY: usize = PIECE_SQUARE_KEYS;
const CASTLING_KEYS: usize = SIDE_KEY + 1;
const EN_PASSANT_KEYS: usize = CASTLING_KEYS + 16;
const KEY_COUNT: usize = EN_PASSANT_KEYS + 8;

const SEED: u64 = 0x5a4f_4252_4953_5421; // "ZOBRIST!"

/// All keys, generated at compile time from one xorshift stream:
/// 768 piece-square keys, 1 side key, 16 castling keys, 8 en passant file keys.
static KEYS: [u64; KEY_COUNT] = {
    let mut table = [0u64; KEY_COUNT];
    let mut state = SEED;
    let mut i = 0;
    while i < KEY_COUNT {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        table[i] = state;
        i += 1;
    }
    table
};

/// Compute the key of a position from scratch.
pub fn position_key(
    board: &Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
) -> u64 {
    let mut key = 0u64;

    for (sq, piece) in board.pieces() {
        key ^= KEYS[piece.index() * 64 + sq.index()];
    }

    if side_to_move == Color::Black {
        key ^= KEYS[SIDE_KEY];
    }

    key ^= KEYS[CASTLING_KEYS + castling.bits() as usize];

    if let Some(ep) = en_passant {
        key ^= KEYS[EN_PASSANT_KEYS + ep.col() as usize];
    }

    key
}
