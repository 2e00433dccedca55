// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::SortKey;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [board]
/// path = "taskboard.json"
/// name = "Release plan"
///
/// [query]
/// sort = ["time", "name"]
/// hide_completed = true
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub board: BoardSection,

    #[serde(default)]
    pub query: QuerySection,
}

/// A [`RawConfigFile`] that passed validation.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub board: BoardSection,
    pub query: QuerySection,
}

impl ConfigFile {
    /// Wrap sections without validating them. Prefer `ConfigFile::try_from`.
    pub fn new_unchecked(board: BoardSection, query: QuerySection) -> Self {
        Self { board, query }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(BoardSection::default(), QuerySection::default())
    }
}

/// `[board]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardSection {
    /// Board file used when `--board` is not given on the command line.
    #[serde(default = "default_board_path")]
    pub path: PathBuf,

    /// Name written into a fresh board by `taskboard init`.
    #[serde(default = "default_board_name")]
    pub name: String,
}

fn default_board_path() -> PathBuf {
    PathBuf::from("taskboard.json")
}

fn default_board_name() -> String {
    "Taskboard".to_string()
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            path: default_board_path(),
            name: default_board_name(),
        }
    }
}

/// `[query]` section: defaults for `taskboard list`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuerySection {
    /// Sort keys used when `list` is given no `--sort`.
    ///
    /// Keys not listed are still appended in canonical order.
    #[serde(default)]
    pub sort: Vec<SortKey>,

    #[serde(default)]
    pub hide_completed: bool,
}
