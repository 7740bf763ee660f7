//! Console command parsing.

use rookery_core::{GameError, MoveText};

/// Errors from parsing a line of console input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The line is neither a command nor move text.
    #[error("unknown command: {input}")]
    Unknown {
        /// The first word of the line.
        input: String,
    },

    /// The line looked like a move but did not parse.
    #[error(transparent)]
    Move(#[from] GameError),

    /// `go` was given a depth that is not a number in 1..=8.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The rejected value.
        value: String,
    },
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move for the side to move, e.g. `e2e4` or `e7e8n`.
    Move(MoveText),
    /// Take back the last ply.
    Undo,
    /// List the legal moves.
    Moves,
    /// Print the board.
    Board,
    /// Let the engine move for the side to move, optionally at a given depth.
    Go { depth: Option<u8> },
    /// Start a new game.
    Reset,
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Empty);
    }

    match tokens[0] {
        "undo" | "u" => Ok(Command::Undo),
        "moves" => Ok(Command::Moves),
        "board" | "b" => Ok(Command::Board),
        "reset" | "new" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "go" => parse_go(&tokens[1..]),
        word if looks_like_move(word) => Ok(Command::Move(word.parse()?)),
        word => Err(CommandError::Unknown {
            input: word.to_string(),
        }),
    }
}

/// `go` alone or `go <depth>`.
fn parse_go(tokens: &[&str]) -> Result<Command, CommandError> {
    let Some(value) = tokens.first() else {
        return Ok(Command::Go { depth: None });
    };
    match value.parse::<u8>() {
        Ok(depth) if (1..=8).contains(&depth) => Ok(Command::Go { depth: Some(depth) }),
        _ => Err(CommandError::InvalidDepth {
            value: value.to_string(),
        }),
    }
}

/// Move text starts with a file letter and a rank digit.
fn looks_like_move(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('a'..='h'), Some('1'..='8'))
    )
}
