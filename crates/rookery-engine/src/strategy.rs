//! Move-selection strategies for computer players.

use std::fmt;

use rand::Rng;
use rookery_core::{GameState, Move};
use tracing::debug;

use crate::error::SearchError;
use crate::eval::evaluate_relative;
use crate::search::control::SearchControl;
use crate::search::find_best_move;

/// How a computer player picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniformly random legal move.
    Random,
    /// Best static evaluation one ply ahead.
    Greedy,
    /// Alpha-beta search to a fixed depth.
    AlphaBeta { depth: u8 },
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => f.write_str("random"),
            Strategy::Greedy => f.write_str("greedy"),
            Strategy::AlphaBeta { depth } => write!(f, "alphabeta(depth {depth})"),
        }
    }
}

/// Pick a move uniformly at random. `None` when `moves` is empty.
pub fn find_random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

/// Pick the move whose resulting position evaluates best for the mover.
///
/// Ties go to the earliest move in `moves`.
pub fn find_greedy_move(state: &mut GameState, moves: &[Move]) -> Result<Option<Move>, SearchError> {
    let mut best: Option<(Move, i32)> = None;

    for &mv in moves {
        state.make_move(mv)?;
        let score = -evaluate_relative(state);
        state.undo_move();

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    Ok(best.map(|(mv, _)| mv))
}

/// Choose a move for the side to move using `strategy`.
///
/// Falls back to a random move when the strategy produces none, for example
/// when a search is stopped before its first depth completes.
pub fn choose_move<R: Rng + ?Sized>(
    state: &mut GameState,
    strategy: Strategy,
    control: &SearchControl,
    rng: &mut R,
) -> Result<Move, SearchError> {
    let moves = state.valid_moves().to_vec();
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let picked = match strategy {
        Strategy::Random => find_random_move(&moves, rng),
        Strategy::Greedy => find_greedy_move(state, &moves)?,
        Strategy::AlphaBeta { depth } => find_best_move(state, &moves, depth, control)?.best_move,
    };

    let mv = match picked {
        Some(mv) => mv,
        None => {
            debug!(%strategy, "strategy gave no move, falling back to random");
            find_random_move(&moves, rng).ok_or(SearchError::NoLegalMoves)?
        }
    };

    debug!(%strategy, mv = %mv.text(), "move chosen");
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rookery_core::{Board, CastleRights, Color, GameState, Square};

    use super::*;

    fn state_from(placements: &[(&str, &str)], side: Color) -> GameState {
        let mut codes = [["--"; 8]; 8];
        for &(name, code) in placements {
            let sq = Square::from_algebraic(name).unwrap();
            codes[sq.row() as usize][sq.col() as usize] = code;
        }
        let board = Board::from_codes(&codes).unwrap();
        GameState::from_board(board, side, CastleRights::NONE, None).unwrap()
    }

    #[test]
    fn random_move_is_legal() {
        let state = GameState::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mv = find_random_move(state.valid_moves(), &mut rng).unwrap();
            assert!(state.valid_moves().contains(&mv));
        }
    }

    #[test]
    fn random_move_on_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(find_random_move(&[], &mut rng), None);
    }

    #[test]
    fn same_seed_same_move() {
        let state = GameState::new();
        let a = find_random_move(state.valid_moves(), &mut StdRng::seed_from_u64(42));
        let b = find_random_move(state.valid_moves(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn greedy_takes_the_queen() {
        let mut state = state_from(
            &[("e1", "wK"), ("a4", "wB"), ("e8", "bK"), ("d7", "bQ"), ("h7", "bp")],
            Color::White,
        );
        let moves = state.valid_moves().to_vec();
        let mv = find_greedy_move(&mut state, &moves).unwrap().unwrap();
        assert_eq!(mv.text(), "a4d7");
    }

    #[test]
    fn greedy_prefers_mate_over_material() {
        // Ra8 mates; Rxh6 only wins a knight.
        let mut state = state_from(
            &[("g8", "bK"), ("g6", "wK"), ("a1", "wR"), ("h1", "wR"), ("h6", "bN")],
            Color::White,
        );
        let moves = state.valid_moves().to_vec();
        let mv = find_greedy_move(&mut state, &moves).unwrap().unwrap();
        assert!(mv.text() == "a1a8", "expected mate, got {}", mv.text());
    }

    #[test]
    fn greedy_on_empty_list() {
        let mut state = GameState::new();
        assert_eq!(find_greedy_move(&mut state, &[]).unwrap(), None);
    }

    #[test]
    fn choose_move_without_moves_errors() {
        let mut state = state_from(&[("a8", "bK"), ("c7", "wK"), ("b6", "wQ")], Color::Black);
        let mut rng = StdRng::seed_from_u64(3);
        let result = choose_move(&mut state, Strategy::Greedy, &SearchControl::unbounded(), &mut rng);
        assert_eq!(result, Err(SearchError::NoLegalMoves));
    }

    #[test]
    fn stopped_search_falls_back_to_random() {
        let mut state = GameState::new();
        let control = SearchControl::unbounded();
        control.stop();
        let mut rng = StdRng::seed_from_u64(9);
        let mv = choose_move(&mut state, Strategy::AlphaBeta { depth: 3 }, &control, &mut rng).unwrap();
        assert!(state.valid_moves().contains(&mv));
    }

    #[test]
    fn strategy_display() {
        assert_eq!(Strategy::Random.to_string(), "random");
        assert_eq!(Strategy::AlphaBeta { depth: 4 }.to_string(), "alphabeta(depth 4)");
    }
}
