//! Move ordering via MVV-LVA: captures first, most valuable victim first.

use rookery_core::{Move, MoveKind};

/// MVV-LVA scores indexed by `[victim][attacker]`.
///
/// Weights: Pawn=1, Knight=3, Bishop=3, Rook=5, Queen=9, King=0.
/// Formula: `victim_weight * 16 - attacker_weight`.
const MVV_LVA: [[i32; 6]; 6] = [
    // victim = Pawn (weight 1)
    [15, 13, 13, 11, 7, 16],
    // victim = Knight (weight 3)
    [47, 45, 45, 43, 39, 48],
    // victim = Bishop (weight 3)
    [47, 45, 45, 43, 39, 48],
    // victim = Rook (weight 5)
    [79, 77, 77, 75, 71, 80],
    // victim = Queen (weight 9)
    [143, 141, 141, 139, 135, 144],
    // victim = King (weight 0)
    [-1, -3, -3, -5, -9, 0],
];

/// Score a move for ordering purposes. Higher scores are searched first.
///
/// Score bands:
/// - Captures (including en passant): 10,000 + MVV-LVA
/// - Promotions: 5,000 (plus the capture score when capturing)
/// - Castling: 1
/// - Quiet: 0
fn score_move(mv: Move) -> i32 {
    let mut score = match mv.piece_captured() {
        Some(victim) => 10_000 + MVV_LVA[victim.kind().index()][mv.piece_moved().kind().index()],
        None => 0,
    };
    match mv.kind() {
        MoveKind::Promotion => score += 5_000,
        MoveKind::Castling => score += 1,
        MoveKind::Normal | MoveKind::EnPassant => {}
    }
    score
}

/// Sort `moves` in place, best candidates first. The sort is stable, so
/// equally scored moves keep their generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|&mv| std::cmp::Reverse(score_move(mv)));
}
