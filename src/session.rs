//! Interactive play session: reads commands, applies moves, lets computer
//! players answer.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rookery_core::{GameState, MoveText, PromotionPiece};
use rookery_engine::{SearchControl, Strategy, choose_move};
use tracing::{debug, info, warn};

use crate::command::{Command, parse_command};
use crate::config::Config;

const HELP: &str = "\
commands:
  e2e4, e7e8n   play a move (fifth letter picks the promotion piece)
  undo          take back the last move
  moves         list legal moves
  board         show the board
  go [depth]    let the engine move for the side to move
  reset         start a new game
  quit          leave";

/// Whether the command loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One game at the console, with its players and RNG.
pub struct Session {
    config: Config,
    state: GameState,
    rng: StdRng,
    stop_flag: Arc<AtomicBool>,
}

impl Session {
    /// Create a session at the starting position.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            state: GameState::new(),
            rng,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The game being played.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read commands from `input` until `quit` or end of input, writing the
    /// board and replies to `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.show(out)?;
        self.autoplay(out)?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            debug!(cmd = %line.trim(), "received command");

            let flow = match parse_command(&line) {
                Ok(cmd) => self.handle(cmd, out)?,
                Err(e) => {
                    warn!(error = %e, "rejected input");
                    writeln!(out, "error: {e}")?;
                    Flow::Continue
                }
            };
            out.flush().context("failed to flush output")?;

            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow> {
        match cmd {
            Command::Move(text) => self.handle_move(text, out)?,
            Command::Undo => self.handle_undo(out)?,
            Command::Moves => {
                let mut texts: Vec<String> = self.state.valid_moves().iter().map(|mv| mv.text()).collect();
                texts.sort();
                writeln!(out, "{} legal: {}", texts.len(), texts.join(" "))?;
            }
            Command::Board => self.show(out)?,
            Command::Go { depth } => self.handle_go(depth, out)?,
            Command::Reset => {
                info!("new game");
                self.state = GameState::new();
                self.show(out)?;
                self.autoplay(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_move<W: Write>(&mut self, text: MoveText, out: &mut W) -> Result<()> {
        if let Some(outcome) = self.state.outcome() {
            writeln!(out, "game over: {outcome}")?;
            return Ok(());
        }

        let found = self
            .state
            .valid_moves()
            .iter()
            .find(|mv| mv.start() == text.start && mv.end() == text.end)
            .copied();
        let Some(mv) = found else {
            warn!(start = %text.start, end = %text.end, "illegal move");
            writeln!(out, "illegal move: {}{}", text.start, text.end)?;
            return Ok(());
        };

        let choice = text.promotion.map_or(PromotionPiece::Queen.text_char(), PromotionPiece::text_char);
        self.state.make_move_promoting(mv, choice)?;
        self.show(out)?;
        self.autoplay(out)
    }

    /// Undo back to the last position where a human is to move.
    fn handle_undo<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if !self.state.undo_move() {
            writeln!(out, "nothing to undo")?;
            return Ok(());
        }
        let human_to_move = |session: &Session| {
            session.config.strategy(session.config.player(session.state.side_to_move())).is_none()
        };
        if !human_to_move(self) && self.state.ply() > 0 {
            self.state.undo_move();
        }
        self.show(out)
    }

    fn handle_go<W: Write>(&mut self, depth: Option<u8>, out: &mut W) -> Result<()> {
        if self.state.outcome().is_some() {
            return self.show(out);
        }
        let player = self.config.player(self.state.side_to_move());
        let strategy = match (depth, self.config.strategy(player)) {
            (Some(depth), _) => Strategy::AlphaBeta { depth },
            (None, Some(strategy)) => strategy,
            (None, None) => Strategy::AlphaBeta {
                depth: self.config.depth,
            },
        };
        self.engine_move(strategy, out)?;
        self.autoplay(out)
    }

    /// Let computer players move until a human is to move or the game ends.
    fn autoplay<W: Write>(&mut self, out: &mut W) -> Result<()> {
        while self.state.outcome().is_none() {
            let player = self.config.player(self.state.side_to_move());
            let Some(strategy) = self.config.strategy(player) else {
                break;
            };
            self.engine_move(strategy, out)?;
        }
        Ok(())
    }

    fn engine_move<W: Write>(&mut self, strategy: Strategy, out: &mut W) -> Result<()> {
        self.stop_flag.store(false, Ordering::Release);
        let control = match self.config.max_nodes {
            Some(nodes) => SearchControl::new_with_nodes(Arc::clone(&self.stop_flag), nodes),
            None => SearchControl::new_infinite(Arc::clone(&self.stop_flag)),
        };

        let side = self.state.side_to_move();
        let mv = choose_move(&mut self.state, strategy, &control, &mut self.rng)
            .with_context(|| format!("{strategy} player for {side} found no move"))?;
        self.state.make_move(mv)?;

        writeln!(out, "{side} ({strategy}) plays {mv}")?;
        self.show(out)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.state.board().pretty())?;
        if let Some(mv) = self.state.last_move() {
            writeln!(out, "last move: {mv}")?;
        }
        match self.state.outcome() {
            Some(outcome) => writeln!(out, "game over: {outcome}")?,
            None if self.state.in_check() => writeln!(out, "{} to move, in check", self.state.side_to_move())?,
            None => writeln!(out, "{} to move", self.state.side_to_move())?,
        }
        Ok(())
    }
}
