//! Legal move generation.
//!
//! Each piece kind has its own generator, looked up through a dispatch table.
//! Legality comes from a pin/check scan around the king done once up front:
//! pinned pieces stay on their pin ray, a single check restricts non-king
//! moves to the squares that resolve it, and a double check leaves only king
//! moves. King steps and en passant are tested directly against the scan.

mod king;
mod knights;
mod pawns;
mod pins;
mod sliders;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{Direction, Square};

pub use self::pins::{Check, CheckScan, Pin, is_attacked, scan};

/// Whether generators must respect king safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenMode {
    /// Piece movement rules only.
    PseudoLegal,
    /// Full legality for the side whose king stands on `king_sq`.
    Legal { king_sq: Square },
}

/// Destination squares allowed while the king is in check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CheckMask {
    Any,
    Only(Vec<Square>),
}

impl CheckMask {
    /// Mask for a single check: the checker's square plus, for a ray attack,
    /// every square between it and the king.
    fn for_check(king_sq: Square, check: Check) -> CheckMask {
        let Some(dir) = check.direction else {
            return CheckMask::Only(vec![check.square]);
        };
        let mut squares = Vec::with_capacity(7);
        for distance in 1..8 {
            let Some(sq) = king_sq.offset(dir, distance) else {
                break;
            };
            squares.push(sq);
            if sq == check.square {
                break;
            }
        }
        CheckMask::Only(squares)
    }

    #[inline]
    pub(crate) fn allows(&self, sq: Square) -> bool {
        match self {
            CheckMask::Any => true,
            CheckMask::Only(squares) => squares.contains(&sq),
        }
    }
}

/// Everything a per-piece generator needs to know about the position.
pub(crate) struct GenContext<'a> {
    pub board: &'a Board,
    pub side: Color,
    pub en_passant: Option<Square>,
    pub pins: &'a [Pin],
    pub check_mask: &'a CheckMask,
    pub mode: GenMode,
}

impl GenContext<'_> {
    /// The pin ray through `sq`, if the piece there is pinned.
    #[inline]
    pub fn pin_direction(&self, sq: Square) -> Option<Direction> {
        self.pins.iter().find(|pin| pin.square == sq).map(|pin| pin.direction)
    }

    /// Return `true` if the piece on `from` may step along `dir` without
    /// leaving its pin ray.
    #[inline]
    pub fn may_move_along(&self, from: Square, dir: Direction) -> bool {
        self.pin_direction(from).is_none_or(|pin| pin.is_parallel(dir))
    }
}

/// A per-piece move generator.
pub(crate) type GenFn = fn(&GenContext<'_>, Square, Piece, &mut Vec<Move>);

/// Legal moves of a position together with the scan they were derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub moves: Vec<Move>,
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Move generator dispatching on piece kind.
#[derive(Clone)]
pub struct MoveGenerator {
    table: [GenFn; PieceKind::COUNT],
}

impl MoveGenerator {
    /// Build the dispatch table, indexed by [`PieceKind::index`].
    pub fn new() -> MoveGenerator {
        MoveGenerator {
            table: [
                pawns::gen_pawn,
                knights::gen_knight,
                sliders::gen_bishop,
                sliders::gen_rook,
                sliders::gen_queen,
                king::gen_king,
            ],
        }
    }

    /// Generate every legal move for `side`, whose king stands on `king_sq`.
    ///
    /// Castling moves come last. The board is only read.
    pub fn legal_moves(
        &self,
        board: &Board,
        side: Color,
        king_sq: Square,
        en_passant: Option<Square>,
        castling: CastleRights,
    ) -> LegalMoves {
        let scan = pins::scan(board, king_sq, side);
        let check_mask = match scan.checks.as_slice() {
            [] => CheckMask::Any,
            [check] => CheckMask::for_check(king_sq, *check),
            _ => CheckMask::Only(Vec::new()),
        };
        let ctx = GenContext {
            board,
            side,
            en_passant,
            pins: &scan.pins,
            check_mask: &check_mask,
            mode: GenMode::Legal { king_sq },
        };

        let mut moves = Vec::with_capacity(64);
        if scan.checks.len() > 1 {
            // Double check: only king moves can resolve it
            king::gen_king(&ctx, king_sq, Piece::new(PieceKind::King, side), &mut moves);
        } else {
            for (sq, piece) in board.pieces() {
                if piece.color() == side {
                    (self.table[piece.kind().index()])(&ctx, sq, piece, &mut moves);
                }
            }
        }
        king::gen_castling(&ctx, king_sq, castling, &mut moves);

        LegalMoves {
            moves,
            in_check: scan.in_check,
            pins: scan.pins,
            checks: scan.checks,
        }
    }

    /// Moves of the piece on `from` by movement rules alone, ignoring pins,
    /// checks and castling. Empty if `from` holds no piece of `side`.
    pub fn pseudo_legal_moves(
        &self,
        board: &Board,
        from: Square,
        side: Color,
        en_passant: Option<Square>,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(piece) = board.piece_at(from).filter(|p| p.color() == side) else {
            return moves;
        };
        let ctx = GenContext {
            board,
            side,
            en_passant,
            pins: &[],
            check_mask: &CheckMask::Any,
            mode: GenMode::PseudoLegal,
        };
        (self.table[piece.kind().index()])(&ctx, from, piece, &mut moves);
        moves
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveGenerator").finish_non_exhaustive()
    }
}
