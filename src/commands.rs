// src/commands.rs

//! Execution of a single CLI command against a loaded board.

use std::io::Write;

use anyhow::{Context, Result, bail};

use crate::board::{Board, Query};
use crate::cli::{Command, CreateArgs, LabelCommand, ListArgs};
use crate::config::ConfigFile;
use crate::graph::{Node, NodeKind};
use crate::snapshot::{format_timestamp, parse_timestamp};

/// Whether a command changed the board and it needs saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Modified,
}

/// Apply `command` to `board`, writing user-facing output to `out`.
///
/// `Init` is handled by the caller because it runs without a board.
pub fn execute<W: Write>(
    board: &mut Board,
    command: &Command,
    cfg: &ConfigFile,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Command::Init { .. } => bail!("init must be handled before a board is loaded"),
        Command::Task(args) => {
            let id = create(board, args, true)?;
            writeln!(out, "{id}")?;
            Ok(Outcome::Modified)
        }
        Command::Goal(args) => {
            let id = create(board, args, false)?;
            writeln!(out, "{id}")?;
            Ok(Outcome::Modified)
        }
        Command::Depend { node, dependency } => {
            board.add_dependency(node, dependency)?;
            Ok(Outcome::Modified)
        }
        Command::Undepend { node, dependency } => {
            board.remove_dependency(node, dependency)?;
            Ok(Outcome::Modified)
        }
        Command::Complete { task } => {
            board.mark_complete(task)?;
            Ok(Outcome::Modified)
        }
        Command::Reopen { task } => {
            board.mark_incomplete(task)?;
            Ok(Outcome::Modified)
        }
        Command::Remove { node } => {
            if !board.remove_object(node) {
                bail!("no node with id '{node}'");
            }
            Ok(Outcome::Modified)
        }
        Command::Rename { node, name } => {
            let n = board
                .get_mut(node)
                .with_context(|| format!("no node with id '{node}'"))?;
            n.set_name(name.clone());
            Ok(Outcome::Modified)
        }
        Command::Label(cmd) => label(board, cmd, out),
        Command::List(args) => {
            list(board, args, cfg, out)?;
            Ok(Outcome::Unchanged)
        }
        Command::Show { node } => {
            show(board, node, out)?;
            Ok(Outcome::Unchanged)
        }
    }
}

fn create(board: &mut Board, args: &CreateArgs, task: bool) -> Result<String> {
    let at = args
        .at
        .as_deref()
        .map(parse_timestamp)
        .transpose()
        .context("parsing --at")?;

    let id = match (task, at) {
        (true, Some(at)) => board.create_task_at(&args.name, at)?,
        (true, None) => board.create_task(&args.name)?,
        (false, Some(at)) => board.create_goal_at(&args.name, at)?,
        (false, None) => board.create_goal(&args.name)?,
    };
    Ok(id)
}

fn label<W: Write>(board: &mut Board, cmd: &LabelCommand, out: &mut W) -> Result<Outcome> {
    let changed = match cmd {
        LabelCommand::Create { name } => board.create_label(name.clone()),
        LabelCommand::Add { node, name, create } => board.add_label(node, name, *create)?,
        LabelCommand::Remove { node, name } => board.remove_label(node, name)?,
        LabelCommand::Delete { name } => board.delete_label(name),
    };

    if changed {
        Ok(Outcome::Modified)
    } else {
        writeln!(out, "nothing changed")?;
        Ok(Outcome::Unchanged)
    }
}

fn list<W: Write>(board: &Board, args: &ListArgs, cfg: &ConfigFile, out: &mut W) -> Result<()> {
    let sort_keys = if args.sort.is_empty() {
        cfg.query.sort.clone()
    } else {
        args.sort.clone()
    };

    let query = Query {
        sort_keys,
        include_labels: args.include.clone(),
        exclude_labels: args.exclude.clone(),
        exclude_completed: args.hide_completed || cfg.query.hide_completed,
        exclude_not_started: args.hide_not_started,
        kind: args.kind,
    };

    for node in board.query(&query)? {
        writeln!(out, "{}", summary_line(node))?;
    }
    Ok(())
}

fn kind_label(node: &Node) -> &'static str {
    match node.kind() {
        NodeKind::Task { .. } => "task",
        NodeKind::Goal => "goal",
    }
}

fn summary_line(node: &Node) -> String {
    let mut line = format!(
        "{}  {:<4}  {:<11}  {}",
        node.id(),
        kind_label(node),
        node.status().to_string(),
        node.name()
    );
    if !node.labels().is_empty() {
        line.push_str(&format!("  [{}]", node.labels().join(", ")));
    }
    line
}

fn show<W: Write>(board: &Board, id: &str, out: &mut W) -> Result<()> {
    let node = board
        .get(id)
        .with_context(|| format!("no node with id '{id}'"))?;

    writeln!(out, "{}", summary_line(node))?;
    writeln!(out, "  time: {}", format_timestamp(&node.timestamp()))?;

    for (title, ids) in [
        ("depends on", node.dependencies()),
        ("needed by", node.dependents()),
    ] {
        if ids.is_empty() {
            continue;
        }
        writeln!(out, "  {title}:")?;
        for other in ids.iter().filter_map(|i| board.get(i)) {
            writeln!(out, "    {}", summary_line(other))?;
        }
    }
    Ok(())
}
