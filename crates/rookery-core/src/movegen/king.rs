//! King move and castling generation.

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{Direction, Square};

use super::pins::is_attacked;
use super::{GenContext, GenMode};

/// Generate one-step king moves from `from`.
///
/// In legal mode each destination is tested by rescanning from it; the king's
/// own square is transparent to that scan, so retreating along a checking ray
/// is rejected.
pub(super) fn gen_king(ctx: &GenContext<'_>, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for step in Direction::KING_STEPS {
        let Some(to) = from.offset(step, 1) else {
            continue;
        };
        let captured = ctx.board.piece_at(to);
        if captured.is_some_and(|target| target.color() == ctx.side) {
            continue;
        }
        if matches!(ctx.mode, GenMode::Legal { .. }) && is_attacked(ctx.board, to, ctx.side) {
            continue;
        }
        moves.push(Move::new(from, to, piece, captured, MoveKind::Normal));
    }
}

/// Append castling moves for the side to move.
///
/// The king must stand on its home square and not be attacked, the right must
/// be held, a friendly rook must stand on the corner, every square between
/// them must be empty, and the two squares the king crosses must be safe.
pub(super) fn gen_castling(
    ctx: &GenContext<'_>,
    king_sq: Square,
    rights: CastleRights,
    moves: &mut Vec<Move>,
) {
    let us = ctx.side;
    let home = Square::at(us.back_row(), 4);
    if king_sq != home || is_attacked(ctx.board, king_sq, us) {
        return;
    }
    let king = Piece::new(PieceKind::King, us);

    for side in CastleSide::ALL {
        if !rights.has(us, side) {
            continue;
        }

        let rook_sq = Square::at(us.back_row(), side.rook_col());
        if ctx.board.piece_at(rook_sq) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }

        let (lo, hi) = if side.rook_col() > home.col() {
            (home.col() + 1, side.rook_col())
        } else {
            (side.rook_col() + 1, home.col())
        };
        let path_clear = (lo..hi).all(|col| ctx.board.is_empty(Square::at(us.back_row(), col)));
        if !path_clear {
            continue;
        }

        let toward = Direction::new(0, side.king_delta().signum());
        let (Some(transit), Some(dest)) = (home.offset(toward, 1), home.offset(toward, 2)) else {
            continue;
        };
        if is_attacked(ctx.board, transit, us) || is_attacked(ctx.board, dest, us) {
            continue;
        }

        moves.push(Move::new(home, dest, king, None, MoveKind::Castling));
    }
}
