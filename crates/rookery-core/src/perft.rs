//! Perft (performance test) for move generation correctness verification.
//!
//! Walks the tree through [`GameState`] make/undo, so the bookkeeping is
//! exercised along with the generator.

use crate::game_state::GameState;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without making them.
pub fn perft(state: &mut GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.valid_moves().to_vec();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        if state.make_move(mv).is_ok() {
            nodes += perft(state, depth - 1);
            state.undo_move();
        }
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move_text, node_count)` pairs sorted alphabetically.
pub fn divide(state: &mut GameState, depth: usize) -> Vec<(String, u64)> {
    let moves = state.valid_moves().to_vec();
    let mut results: Vec<(String, u64)> = Vec::with_capacity(moves.len());
    for mv in moves {
        if state.make_move(mv).is_err() {
            continue;
        }
        let count = if depth <= 1 { 1 } else { perft(state, depth - 1) };
        state.undo_move();
        results.push((mv.text(), count));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
