// src/snapshot/codec.rs

//! JSON encoding of snapshots and board files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::board::Board;
use crate::errors::Result;
use crate::snapshot::model::BoardSnapshot;

pub fn to_json(snapshot: &BoardSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

pub fn from_json(json: &str) -> Result<BoardSnapshot> {
    Ok(serde_json::from_str(json)?)
}

impl Board {
    pub fn to_json(&self) -> Result<String> {
        to_json(&self.to_snapshot())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Board::from_snapshot(&from_json(json)?)
    }
}

/// Read and rebuild a board from a JSON file.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let board = Board::from_json(&contents)?;
    debug!(path = %path.display(), nodes = board.len(), "board file read");
    Ok(board)
}

/// Write a board to a JSON file, creating parent directories as needed.
pub fn save_board(path: impl AsRef<Path>, board: &Board) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut json = board.to_json()?;
    json.push('\n');
    fs::write(path, json)?;
    debug!(path = %path.display(), nodes = board.len(), "board file written");
    Ok(())
}
