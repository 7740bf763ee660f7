//! Pawn move generation.

use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{Direction, Square};

use super::pins::is_attacked;
use super::{GenContext, GenMode};

/// Generate pawn pushes, captures and en passant captures from `from`.
///
/// A move onto the promotion row is emitted once, flagged as a promotion;
/// the promoted piece is picked when the move is made.
pub(super) fn gen_pawn(ctx: &GenContext<'_>, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    let step = ctx.side.pawn_step();
    let push_kind = |to: Square| {
        if to.row() == ctx.side.promotion_row() {
            MoveKind::Promotion
        } else {
            MoveKind::Normal
        }
    };

    // --- Pushes ---
    let forward = Direction::new(step, 0);
    if ctx.may_move_along(from, forward)
        && let Some(one) = from.offset(forward, 1)
        && ctx.board.is_empty(one)
    {
        if ctx.check_mask.allows(one) {
            moves.push(Move::new(from, one, piece, None, push_kind(one)));
        }
        if from.row() == ctx.side.pawn_start_row()
            && let Some(two) = from.offset(forward, 2)
            && ctx.board.is_empty(two)
            && ctx.check_mask.allows(two)
        {
            moves.push(Move::new(from, two, piece, None, MoveKind::Normal));
        }
    }

    // --- Captures ---
    for dc in [-1, 1] {
        let dir = Direction::new(step, dc);
        // Pinned pawns can only capture along the pin ray
        if !ctx.may_move_along(from, dir) {
            continue;
        }
        let Some(to) = from.offset(dir, 1) else {
            continue;
        };

        match ctx.board.piece_at(to) {
            Some(target) if target.color() != ctx.side => {
                if ctx.check_mask.allows(to) {
                    moves.push(Move::new(from, to, piece, Some(target), push_kind(to)));
                }
            }
            None if ctx.en_passant == Some(to) => {
                if let Some(mv) = en_passant(ctx, from, to, piece) {
                    moves.push(mv);
                }
            }
            _ => {}
        }
    }
}

/// Build the en passant capture onto `to`, if it is playable.
fn en_passant(ctx: &GenContext<'_>, from: Square, to: Square, piece: Piece) -> Option<Move> {
    let victim_sq = Square::at(from.row(), to.col());
    let victim = ctx
        .board
        .piece_at(victim_sq)
        .filter(|p| p.is(PieceKind::Pawn, ctx.side.flip()))?;

    // In check: the capture must land on the block ray or remove the checker.
    if !ctx.check_mask.allows(to) && !ctx.check_mask.allows(victim_sq) {
        return None;
    }

    if let GenMode::Legal { king_sq } = ctx.mode {
        // Two pawns leave one rank at once, which the pin scan cannot see.
        // Play it out on a scratch board and look at the king.
        let mut after = *ctx.board;
        after.take(from);
        after.take(victim_sq);
        after.set(to, Some(piece));
        if is_attacked(&after, king_sq, ctx.side) {
            return None;
        }
    }

    Some(Move::new(from, to, piece, Some(victim), MoveKind::EnPassant))
}
