//! Negamax alpha-beta search over [`GameState`] make/undo.

use rookery_core::{GameState, Move, Outcome};

use crate::error::SearchError;
use crate::eval::{CHECKMATE, DRAW, evaluate_relative};
use crate::search::control::SearchControl;
use crate::search::ordering::order_moves;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Scores beyond this magnitude indicate a forced mate.
pub const MATE_THRESHOLD: i32 = CHECKMATE - 256;

/// Mutable state shared across one search.
pub(super) struct SearchContext<'a> {
    pub nodes: u64,
    pub control: &'a SearchControl,
}

/// Score of a finished game from the side to move's perspective.
///
/// Mates found nearer the root score higher, so the search prefers the
/// shortest mate.
fn terminal_score(outcome: Outcome, ply: u8) -> i32 {
    match outcome {
        Outcome::Checkmate { .. } => -(CHECKMATE - ply as i32),
        Outcome::Draw(_) => DRAW,
    }
}

/// Search every move in `moves` at the root and return the best one.
///
/// `moves` is searched in the order given.
pub(super) fn search_root(
    state: &mut GameState,
    moves: &[Move],
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> Result<(Option<Move>, i32), SearchError> {
    let mut alpha = -INF;
    let mut best_move = None;

    for &mv in moves {
        state.make_move(mv)?;
        let result = negamax(state, depth.saturating_sub(1), 1, -INF, -alpha, ctx);
        state.undo_move();
        let score = -result?;

        if ctx.control.is_stopped() {
            break;
        }
        if best_move.is_none() || score > alpha {
            alpha = score;
            best_move = Some(mv);
        }
    }

    Ok((best_move, alpha))
}

/// Negamax alpha-beta search.
///
/// Returns the best score for the side to move. The state is restored before
/// returning, including on error.
pub(super) fn negamax(
    state: &mut GameState,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> Result<i32, SearchError> {
    ctx.nodes += 1;

    // Check stop condition (external flag or node budget)
    if ctx.control.should_stop(ctx.nodes) {
        return Ok(0);
    }

    if let Some(outcome) = state.outcome() {
        return Ok(terminal_score(outcome, ply));
    }

    if depth == 0 {
        return Ok(evaluate_relative(state));
    }

    let mut moves = state.valid_moves().to_vec();
    order_moves(&mut moves);

    let mut best_score = -INF;
    for mv in moves {
        state.make_move(mv)?;
        let result = negamax(state, depth - 1, ply + 1, -beta, -alpha, ctx);
        state.undo_move();
        let score = -result?;

        if ctx.control.is_stopped() {
            return Ok(0);
        }

        if score > best_score {
            best_score = score;
            if score > alpha {
                alpha = score;
            }
        }

        if alpha >= beta {
            break;
        }
    }

    Ok(best_score)
}
