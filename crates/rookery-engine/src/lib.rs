//! Move selection for rookery: evaluation, search and player strategies.

pub mod error;
pub mod eval;
pub mod search;
pub mod strategy;

pub use error::SearchError;
pub use eval::{CHECKMATE, DRAW, evaluate, evaluate_relative};
pub use search::control::SearchControl;
pub use search::{SearchResult, find_best_move};
pub use strategy::{Strategy, choose_move, find_greedy_move, find_random_move};
