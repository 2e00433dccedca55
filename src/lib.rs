// src/lib.rs

//! In-memory board of tasks and goals connected by dependencies.
//!
//! - [`graph`]: the dependency graph and status propagation.
//! - [`board`]: node ownership, labels and queries.
//! - [`snapshot`]: the flat persisted form and its JSON codec.
//! - [`providers`]: injected clock and id sources.
//!
//! The remaining modules make up the `taskboard` command-line front end.

pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod providers;
pub mod snapshot;
pub mod types;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

pub use board::{Board, Query};
pub use errors::TaskboardError;
pub use graph::{Node, NodeId, NodeKind, Status};
pub use types::{ItemKind, SortKey};

use crate::cli::{CliArgs, Command};
use crate::commands::Outcome;
use crate::config::load_or_default;
use crate::snapshot::codec::{load_board, save_board};

/// High-level entry point used by `main.rs`.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

/// Same as [`run`], with command output sent to `out`.
///
/// This wires together:
/// - config loading
/// - reading the board file
/// - executing one command
/// - writing the board file back if it changed
pub fn run_with_output<W: Write>(args: CliArgs, out: &mut W) -> Result<()> {
    let cfg = load_or_default(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    let board_path = args.board.clone().unwrap_or_else(|| cfg.board.path.clone());

    if let Command::Init { name } = &args.command {
        let name = name.clone().unwrap_or_else(|| cfg.board.name.clone());
        return init_board(&board_path, &name);
    }

    let mut board = load_board(&board_path)
        .with_context(|| format!("loading board {}", board_path.display()))?;

    let outcome = commands::execute(&mut board, &args.command, &cfg, out)?;

    match outcome {
        Outcome::Modified => {
            save_board(&board_path, &board)
                .with_context(|| format!("saving board {}", board_path.display()))?;
            debug!(path = %board_path.display(), "board saved");
        }
        Outcome::Unchanged => debug!("board unchanged; not saving"),
    }

    Ok(())
}

fn init_board(path: &Path, name: &str) -> Result<()> {
    if path.exists() {
        bail!("board file {} already exists", path.display());
    }

    let board = Board::new(name);
    save_board(path, &board).with_context(|| format!("writing board {}", path.display()))?;
    info!(path = %path.display(), name, "created empty board");
    Ok(())
}
