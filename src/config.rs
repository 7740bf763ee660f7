//! Command-line options and the resolved session settings.

use clap::{Parser, ValueEnum};
use rookery_core::Color;
use rookery_engine::Strategy;

/// Who plays one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves are typed at the prompt.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Best material one ply ahead.
    Greedy,
    /// Alpha-beta search to `--depth`.
    Alphabeta,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess in the terminal", long_about = None)]
pub struct Args {
    /// Player for the white pieces
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub white: PlayerKind,

    /// Player for the black pieces
    #[arg(long, value_enum, default_value_t = PlayerKind::Alphabeta)]
    pub black: PlayerKind,

    /// Search depth in plies for alpha-beta players
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub depth: u8,

    /// Stop each search after this many nodes
    #[arg(long)]
    pub nodes: Option<u64>,

    /// Seed for the random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Resolved settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Search depth used by `go` and alpha-beta players.
    pub depth: u8,
    pub max_nodes: Option<u64>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Alphabeta,
            depth: 3,
            max_nodes: None,
            seed: None,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            white: args.white,
            black: args.black,
            depth: args.depth,
            max_nodes: args.nodes,
            seed: args.seed,
        }
    }
}

impl Config {
    /// Player for `color`.
    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Strategy a computer player of `kind` uses, `None` for humans.
    pub fn strategy(&self, kind: PlayerKind) -> Option<Strategy> {
        match kind {
            PlayerKind::Human => None,
            PlayerKind::Random => Some(Strategy::Random),
            PlayerKind::Greedy => Some(Strategy::Greedy),
            PlayerKind::Alphabeta => Some(Strategy::AlphaBeta { depth: self.depth }),
        }
    }
}
