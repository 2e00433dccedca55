// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::default_config_path;
use crate::types::{ItemKind, SortKey};

/// Command-line arguments for `taskboard`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskboard",
    version,
    about = "Track tasks and goals connected by dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML). Missing file means defaults.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Board file (JSON). Overrides `[board].path` from the config.
    #[arg(long, value_name = "PATH")]
    pub board: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKBOARD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create an empty board file.
    Init {
        /// Board name; defaults to `[board].name`.
        #[arg(long)]
        name: Option<String>,
    },
    /// Create a task and print its id.
    Task(CreateArgs),
    /// Create a goal and print its id.
    Goal(CreateArgs),
    /// Make NODE depend on DEPENDENCY.
    Depend { node: String, dependency: String },
    /// Remove the dependency of NODE on DEPENDENCY.
    Undepend { node: String, dependency: String },
    /// Mark a task as complete.
    Complete { task: String },
    /// Mark a task as not complete.
    Reopen { task: String },
    /// Remove a node and all of its edges.
    Remove { node: String },
    /// Rename a node.
    Rename { node: String, name: String },
    /// Manage labels.
    #[command(subcommand)]
    Label(LabelCommand),
    /// List nodes, filtered and sorted.
    List(ListArgs),
    /// Show one node with its edges.
    Show { node: String },
}

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    pub name: String,

    /// Creation time (`YYYY-MM-DDTHH:MM[:SS]`); defaults to now.
    #[arg(long, value_name = "TIME")]
    pub at: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum LabelCommand {
    /// Register a label.
    Create { name: String },
    /// Attach a label to a node.
    Add {
        node: String,
        name: String,
        /// Register the label if it does not exist yet.
        #[arg(long)]
        create: bool,
    },
    /// Detach a label from a node.
    Remove { node: String, name: String },
    /// Unregister a label and strip it from every node.
    Delete { name: String },
}

#[derive(Debug, Clone, Args, Default)]
pub struct ListArgs {
    /// Sort key (dependents, time, name); repeat for more keys.
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Vec<SortKey>,

    /// Only nodes carrying at least one of these labels.
    #[arg(long = "include", value_name = "LABEL")]
    pub include: Vec<String>,

    /// Drop nodes carrying any of these labels.
    #[arg(long = "exclude", value_name = "LABEL")]
    pub exclude: Vec<String>,

    #[arg(long)]
    pub hide_completed: bool,

    #[arg(long)]
    pub hide_not_started: bool,

    /// task, goal or any.
    #[arg(long, value_name = "KIND", default_value = "any")]
    pub kind: ItemKind,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
