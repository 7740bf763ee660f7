//! Integration tests for the search contract.
//!
//! Every strategy explores positions only through make/undo and must hand
//! the game state back exactly as it found it. Stop requests and node
//! budgets must be honoured.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rookery_core::{Board, CastleRights, Color, GameState, Move, Outcome};
use rookery_engine::{SearchControl, Strategy, choose_move, find_best_move};

type Snapshot = (
    Board,
    bool,
    CastleRights,
    Option<rookery_core::Square>,
    u32,
    u32,
    u64,
    usize,
    Vec<Move>,
    Option<Outcome>,
);

fn snapshot(state: &GameState) -> Snapshot {
    (
        *state.board(),
        state.white_to_move(),
        state.castle_rights(),
        state.enpassant_possible(),
        state.fifty_move_counter(),
        state.repetition_count(),
        state.position_key(),
        state.ply(),
        state.valid_moves().to_vec(),
        state.outcome(),
    )
}

fn play(state: &mut GameState, line: &[&str]) {
    for text in line {
        let mv = state.parse_move(text).unwrap();
        state.make_move(mv).unwrap();
    }
}

/// A middlegame with castling rights, an en passant square and a pin.
fn busy_position() -> GameState {
    let mut state = GameState::new();
    play(
        &mut state,
        &["e2e4", "c7c5", "g1f3", "d7d6", "f1b5", "b8c6", "e4e5", "f7f5"],
    );
    state
}

const STRATEGIES: [Strategy; 3] = [
    Strategy::Random,
    Strategy::Greedy,
    Strategy::AlphaBeta { depth: 3 },
];

// ── State is preserved ────────────────────────────────────────────────────────

#[test]
fn strategies_leave_start_position_untouched() {
    let mut state = GameState::new();
    let before = snapshot(&state);
    let mut rng = StdRng::seed_from_u64(11);
    for strategy in STRATEGIES {
        let mv = choose_move(&mut state, strategy, &SearchControl::unbounded(), &mut rng).unwrap();
        assert!(state.valid_moves().contains(&mv), "{strategy} chose illegal {mv}");
        assert_eq!(snapshot(&state), before, "{strategy} changed the state");
    }
}

#[test]
fn strategies_leave_busy_position_untouched() {
    let mut state = busy_position();
    assert_eq!(state.enpassant_possible(), Some(rookery_core::Square::from_algebraic("f6").unwrap()));
    let before = snapshot(&state);
    let mut rng = StdRng::seed_from_u64(5);
    for strategy in STRATEGIES {
        let mv = choose_move(&mut state, strategy, &SearchControl::unbounded(), &mut rng).unwrap();
        assert!(state.valid_moves().contains(&mv), "{strategy} chose illegal {mv}");
        assert_eq!(snapshot(&state), before, "{strategy} changed the state");
    }
}

#[test]
fn search_preserves_state_in_check() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "f7f6", "d1h5"]);
    assert!(state.in_check());
    let before = snapshot(&state);
    let moves = state.valid_moves().to_vec();
    let result = find_best_move(&mut state, &moves, 3, &SearchControl::unbounded()).unwrap();
    assert_eq!(result.best_move.map(|mv| mv.text()), Some("g7g6".to_string()));
    assert_eq!(snapshot(&state), before);
}

#[test]
fn search_in_promotion_endgame_preserves_state() {
    let mut codes = [["--"; 8]; 8];
    codes[1][0] = "wp";
    codes[7][4] = "wK";
    codes[0][7] = "bK";
    codes[6][6] = "bp";
    let board = Board::from_codes(&codes).unwrap();
    let mut state = GameState::from_board(board, Color::White, CastleRights::NONE, None).unwrap();
    let before = snapshot(&state);
    let moves = state.valid_moves().to_vec();
    let result = find_best_move(&mut state, &moves, 3, &SearchControl::unbounded()).unwrap();
    assert_eq!(result.best_move.map(|mv| mv.text()), Some("a7a8".to_string()));
    assert_eq!(snapshot(&state), before);
}

// ── Cancellation ──────────────────────────────────────────────────────────────

#[test]
fn node_budget_is_respected() {
    let mut state = busy_position();
    let budget = 2_000;
    let control = SearchControl::new_with_nodes(Arc::new(AtomicBool::new(false)), budget);
    let moves = state.valid_moves().to_vec();
    let result = find_best_move(&mut state, &moves, 8, &control).unwrap();
    assert!(result.nodes <= budget, "visited {} nodes with budget {budget}", result.nodes);
    assert!(result.depth < 8);
    assert!(control.is_stopped());
}

#[test]
fn stop_flag_from_another_thread() {
    let state = GameState::new();
    let stopped = Arc::new(AtomicBool::new(false));
    let control = SearchControl::new_infinite(Arc::clone(&stopped));

    let mut worker_state = state.clone();
    let handle = thread::spawn(move || {
        let moves = worker_state.valid_moves().to_vec();
        let result = find_best_move(&mut worker_state, &moves, 12, &control).unwrap();
        (result, worker_state)
    });

    thread::sleep(Duration::from_millis(100));
    stopped.store(true, Ordering::Release);

    let (result, worker_state) = handle.join().unwrap();
    assert!(result.depth < 12);
    assert_eq!(snapshot(&worker_state), snapshot(&state));
}

#[test]
fn finished_game_yields_no_move() {
    let mut state = GameState::new();
    play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(state.checkmate());
    let mut rng = StdRng::seed_from_u64(0);
    for strategy in STRATEGIES {
        assert!(choose_move(&mut state, strategy, &SearchControl::unbounded(), &mut rng).is_err());
    }
}
