mod command;
mod config;
mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};

use crate::config::{Args, Config};
use crate::session::Session;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the board.
    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let config = Config::from(&args);
    info!(
        white = ?config.white,
        black = ?config.black,
        depth = config.depth,
        nodes = ?config.max_nodes,
        "rookery starting"
    );

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;

    info!(plies = session.state().ply(), "rookery shutting down");
    Ok(())
}
