//! Pin and check detection by ray scanning from a king square.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::{Direction, Square};

/// A friendly piece that may only move along `direction` (or its reverse).
///
/// `direction` points from the king toward the pinned piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece attacking the king.
///
/// `direction` points from the king toward the checker; knight checks have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub direction: Option<Direction>,
}

/// Result of scanning around a king square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckScan {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Return `true` if a piece of `kind` and `color` standing `distance` steps
/// along `dir` from a square attacks that square.
fn attacks_along(kind: PieceKind, color: Color, dir: Direction, distance: i8) -> bool {
    match kind {
        PieceKind::Rook => dir.is_orthogonal(),
        PieceKind::Bishop => !dir.is_orthogonal(),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // The pawn sits one row behind the square it hits, relative to its own advance.
        PieceKind::Pawn => distance == 1 && dir.dc != 0 && dir.dr == -color.pawn_step(),
        PieceKind::Knight => false,
    }
}

/// Scan the eight rays and the knight jumps around `origin` for `us`.
///
/// `origin` need not hold the king: `us`'s own king is treated as transparent,
/// so the scan can test a square the king is about to step onto. The board is
/// only read.
pub fn scan(board: &Board, origin: Square, us: Color) -> CheckScan {
    let mut result = CheckScan::default();

    for dir in Direction::ORTHOGONAL.into_iter().chain(Direction::DIAGONAL) {
        let mut candidate: Option<Square> = None;
        for distance in 1..8 {
            let Some(sq) = origin.offset(dir, distance) else {
                break;
            };
            let Some(piece) = board.piece_at(sq) else {
                continue;
            };

            if piece.color() == us {
                if piece.kind() == PieceKind::King {
                    continue;
                }
                if candidate.is_some() {
                    break;
                }
                candidate = Some(sq);
                continue;
            }

            if attacks_along(piece.kind(), piece.color(), dir, distance) {
                match candidate {
                    None => result.checks.push(Check {
                        square: sq,
                        direction: Some(dir),
                    }),
                    Some(pinned) => result.pins.push(Pin {
                        square: pinned,
                        direction: dir,
                    }),
                }
            }
            break;
        }
    }

    for jump in Direction::KNIGHT_JUMPS {
        if let Some(sq) = origin.offset(jump, 1)
            && let Some(piece) = board.piece_at(sq)
            && piece.is(PieceKind::Knight, us.flip())
        {
            result.checks.push(Check {
                square: sq,
                direction: None,
            });
        }
    }

    result.in_check = !result.checks.is_empty();
    result
}

/// Return `true` if `sq` is attacked by the opponent of `us`.
#[inline]
pub fn is_attacked(board: &Board, sq: Square, us: Color) -> bool {
    scan(board, sq, us).in_check
}

#[cfg(test)]
mod tests {
    use super::{Check, Pin, scan};
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::{Direction, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board(placements: &[(&str, &str)]) -> Board {
        let mut board = Board::empty();
        for &(name, code) in placements {
            board.set(sq(name), crate::piece::Piece::from_code(code));
        }
        board
    }

    #[test]
    fn starting_position_is_quiet() {
        let board = Board::starting_position();
        let result = scan(&board, Square::E1, Color::White);
        assert!(!result.in_check);
        assert!(result.pins.is_empty());
        assert!(result.checks.is_empty());
    }

    #[test]
    fn rook_check_on_file() {
        let b = board(&[("e1", "wK"), ("e8", "bR"), ("a8", "bK")]);
        let result = scan(&b, Square::E1, Color::White);
        assert!(result.in_check);
        assert_eq!(
            result.checks,
            vec![Check {
                square: Square::E8,
                direction: Some(Direction::UP)
            }]
        );
    }

    #[test]
    fn bishop_on_file_gives_no_check() {
        let b = board(&[("e1", "wK"), ("e8", "bB"), ("a8", "bK")]);
        assert!(!scan(&b, Square::E1, Color::White).in_check);
    }

    #[test]
    fn friendly_blocker_is_pinned() {
        let b = board(&[("e1", "wK"), ("e4", "wN"), ("e8", "bQ"), ("a8", "bK")]);
        let result = scan(&b, Square::E1, Color::White);
        assert!(!result.in_check);
        assert_eq!(
            result.pins,
            vec![Pin {
                square: sq("e4"),
                direction: Direction::UP
            }]
        );
    }

    #[test]
    fn two_friendly_blockers_mean_no_pin() {
        let b = board(&[("e1", "wK"), ("e2", "wp"), ("e4", "wN"), ("e8", "bQ"), ("a8", "bK")]);
        let result = scan(&b, Square::E1, Color::White);
        assert!(result.pins.is_empty());
        assert!(!result.in_check);
    }

    #[test]
    fn enemy_blocker_shields() {
        let b = board(&[("e1", "wK"), ("e4", "bN"), ("e8", "bQ"), ("a8", "bK")]);
        let result = scan(&b, Square::E1, Color::White);
        assert!(result.pins.is_empty());
        assert!(!result.in_check);
    }

    #[test]
    fn pawn_checks_only_forward_diagonals() {
        // A black pawn on d2 attacks e1; one on e2 does not.
        let hits = board(&[("e1", "wK"), ("d2", "bp"), ("a8", "bK")]);
        assert!(scan(&hits, Square::E1, Color::White).in_check);

        let beside = board(&[("e1", "wK"), ("e2", "bp"), ("a8", "bK")]);
        assert!(!scan(&beside, Square::E1, Color::White).in_check);

        // White pawns attack toward rank 8 only.
        let behind = board(&[("e8", "bK"), ("d7", "wp"), ("a1", "wK")]);
        assert!(scan(&behind, Square::E8, Color::Black).in_check);
        let wrong_way = board(&[("e5", "bK"), ("d4", "wp"), ("a1", "wK")]);
        assert!(scan(&wrong_way, sq("e5"), Color::Black).in_check);
        let past = board(&[("e5", "bK"), ("d6", "wp"), ("a1", "wK")]);
        assert!(!scan(&past, sq("e5"), Color::Black).in_check);
    }

    #[test]
    fn distant_pawn_and_king_do_not_check() {
        let b = board(&[("e1", "wK"), ("c3", "bp"), ("e3", "bK")]);
        assert!(!scan(&b, Square::E1, Color::White).in_check);
    }

    #[test]
    fn knight_check_has_no_direction() {
        let b = board(&[("e1", "wK"), ("f3", "bN"), ("a8", "bK")]);
        let result = scan(&b, Square::E1, Color::White);
        assert_eq!(
            result.checks,
            vec![Check {
                square: sq("f3"),
                direction: None
            }]
        );
    }

    #[test]
    fn double_check() {
        let b = board(&[("e1", "wK"), ("f3", "bN"), ("e8", "bR"), ("a8", "bK")]);
        let result = scan(&b, Square::E1, Color::White);
        assert_eq!(result.checks.len(), 2);
    }

    #[test]
    fn own_king_is_transparent() {
        // Probing f1 while the king still stands on e1: the a1 rook sees through it.
        let b = board(&[("e1", "wK"), ("a1", "bR"), ("h8", "bK")]);
        assert!(scan(&b, Square::F1, Color::White).in_check);
    }

    #[test]
    fn scan_leaves_board_untouched() {
        let b = board(&[("e1", "wK"), ("e4", "wN"), ("e8", "bQ"), ("a8", "bK"), ("f3", "bN")]);
        let before = b;
        let _ = scan(&b, Square::E1, Color::White);
        let _ = scan(&b, sq("d2"), Color::White);
        assert_eq!(b, before);
    }
}
