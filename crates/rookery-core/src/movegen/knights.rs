//! Knight move generation.

use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::square::{Direction, Square};

use super::GenContext;

/// Generate knight moves from `from`.
pub(super) fn gen_knight(ctx: &GenContext<'_>, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    // A jump never stays on a pin ray, so a pinned knight has no moves.
    if ctx.pin_direction(from).is_some() {
        return;
    }

    for jump in Direction::KNIGHT_JUMPS {
        let Some(to) = from.offset(jump, 1) else {
            continue;
        };
        if !ctx.check_mask.allows(to) {
            continue;
        }
        match ctx.board.piece_at(to) {
            Some(target) if target.color() == ctx.side => {}
            captured => moves.push(Move::new(from, to, piece, captured, MoveKind::Normal)),
        }
    }
}
