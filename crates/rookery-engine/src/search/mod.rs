//! Search algorithms and move ordering.

pub mod control;
pub mod negamax;
pub mod ordering;

use rookery_core::{GameState, Move};
use tracing::{debug, info};

use crate::error::SearchError;
use control::SearchControl;
use negamax::{SearchContext, search_root};
use ordering::order_moves;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found at the highest completed depth.
    pub best_move: Option<Move>,
    /// Score from the mover's perspective, in pawns (mates near ±1000).
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Depth reached.
    pub depth: u8,
}

/// Iterative-deepening alpha-beta search of `moves` up to `max_depth` plies.
///
/// Each iteration searches the previous iteration's best move first. If
/// `control` stops the search mid-iteration, that iteration is discarded and
/// the result of the last completed depth is returned. The state is left as
/// it was found.
pub fn find_best_move(
    state: &mut GameState,
    moves: &[Move],
    max_depth: u8,
    control: &SearchControl,
) -> Result<SearchResult, SearchError> {
    let mut ctx = SearchContext { nodes: 0, control };

    let mut ordered = moves.to_vec();
    order_moves(&mut ordered);

    // Track completed iteration results (for abort-safety)
    let mut completed = SearchResult {
        best_move: None,
        score: 0,
        nodes: 0,
        depth: 0,
    };

    for depth in 1..=max_depth.max(1) {
        if ordered.is_empty() {
            break;
        }

        let (best_move, score) = search_root(state, &ordered, depth, &mut ctx)?;

        // If search was aborted mid-iteration, discard this iteration's result
        if control.is_stopped() {
            info!(depth, nodes = ctx.nodes, "search cancelled");
            break;
        }

        completed.best_move = best_move;
        completed.score = score;
        completed.depth = depth;

        if let Some(best) = best_move
            && let Some(pos) = ordered.iter().position(|&mv| mv == best)
        {
            ordered[..=pos].rotate_right(1);
        }
    }

    completed.nodes = ctx.nodes;
    debug!(
        best_move = ?completed.best_move.map(|mv| mv.text()),
        score = completed.score,
        nodes = completed.nodes,
        depth = completed.depth,
        "alpha-beta search finished"
    );
    Ok(completed)
}
