//! Sliding piece (bishop, rook, queen) move generation.

use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::square::{Direction, Square};

use super::GenContext;

pub(super) fn gen_bishop(ctx: &GenContext<'_>, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    slide(ctx, from, piece, &Direction::DIAGONAL, moves);
}

pub(super) fn gen_rook(ctx: &GenContext<'_>, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    slide(ctx, from, piece, &Direction::ORTHOGONAL, moves);
}

/// A queen moves as a rook and as a bishop, under a single pin check.
pub(super) fn gen_queen(ctx: &GenContext<'_>, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    slide(ctx, from, piece, &Direction::ORTHOGONAL, moves);
    slide(ctx, from, piece, &Direction::DIAGONAL, moves);
}

/// Walk each ray until the edge, a friendly piece, or the first enemy piece.
fn slide(
    ctx: &GenContext<'_>,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &dir in directions {
        // Pinned sliders can only move along the pin ray
        if !ctx.may_move_along(from, dir) {
            continue;
        }
        for distance in 1..8 {
            let Some(to) = from.offset(dir, distance) else {
                break;
            };
            match ctx.board.piece_at(to) {
                None => {
                    if ctx.check_mask.allows(to) {
                        moves.push(Move::new(from, to, piece, None, MoveKind::Normal));
                    }
                }
                Some(target) => {
                    if target.color() != ctx.side && ctx.check_mask.allows(to) {
                        moves.push(Move::new(from, to, piece, Some(target), MoveKind::Normal));
                    }
                    break;
                }
            }
        }
    }
}
