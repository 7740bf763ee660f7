//! Static evaluation for rookery.
//!
//! Scores are in pawns from White's perspective: positive means White is
//! better. Decided games override material.

pub mod material;

use rookery_core::{Color, GameState, Outcome};

pub use material::{MATERIAL_VALUE, material};

/// Score of a position where White has been checkmated, negated for Black.
pub const CHECKMATE: i32 = 1000;

/// Score of any drawn position.
pub const DRAW: i32 = 0;

/// Evaluate `state` from White's perspective.
pub fn evaluate(state: &GameState) -> i32 {
    match state.outcome() {
        Some(Outcome::Checkmate { winner: Color::White }) => CHECKMATE,
        Some(Outcome::Checkmate { winner: Color::Black }) => -CHECKMATE,
        Some(Outcome::Draw(_)) => DRAW,
        None => material(state.board()),
    }
}

/// Evaluate `state` from the side to move's perspective.
#[inline]
pub fn evaluate_relative(state: &GameState) -> i32 {
    match state.side_to_move() {
        Color::White => evaluate(state),
        Color::Black => -evaluate(state),
    }
}

#[cfg(test)]
mod tests {
    use rookery_core::{Board, CastleRights, Color, GameState};

    use super::{CHECKMATE, DRAW, evaluate, evaluate_relative};

    fn play(state: &mut GameState, line: &[&str]) {
        for text in line {
            let mv = state.parse_move(text).unwrap();
            state.make_move(mv).unwrap();
        }
    }

    #[test]
    fn starting_position_is_level() {
        assert_eq!(evaluate(&GameState::new()), 0);
    }

    #[test]
    fn checkmate_overrides_material() {
        let mut state = GameState::new();
        play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(evaluate(&state), -CHECKMATE);
        // White to move and mated.
        assert_eq!(evaluate_relative(&state), -CHECKMATE);
    }

    #[test]
    fn draw_scores_zero() {
        let mut codes = [["--"; 8]; 8];
        codes[7][4] = "wK";
        codes[0][4] = "bK";
        codes[7][1] = "wN";
        let board = Board::from_codes(&codes).unwrap();
        let state = GameState::from_board(board, Color::White, CastleRights::NONE, None).unwrap();
        assert_eq!(evaluate(&state), DRAW);
    }

    #[test]
    fn relative_flips_for_black() {
        let mut state = GameState::new();
        play(&mut state, &["e2e4", "d7d5", "e4d5"]);
        assert_eq!(evaluate(&state), 1);
        assert_eq!(evaluate_relative(&state), -1);
    }
}
