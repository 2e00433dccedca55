// src/snapshot/model.rs

//! Flat, id-referencing representation of a board.
//!
//! This is the persisted format, so field names are part of the
//! compatibility surface:
//!
//! ```json
//! {
//!   "name": "Release",
//!   "labels": ["backend"],
//!   "tasks": [
//!     {
//!       "id": "1f0c2a9b",
//!       "name": "Write migration",
//!       "time": "2022-01-25T00:00:00",
//!       "labels": ["backend"],
//!       "isComplete": false,
//!       "dependencies": []
//!     }
//!   ],
//!   "goals": []
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub name: String,

    /// Registered labels, in registration order.
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub tasks: Vec<NodeSnapshot>,

    #[serde(default)]
    pub goals: Vec<NodeSnapshot>,
}

/// One task or goal. Which list it sits in decides its variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub id: String,
    pub name: String,

    /// Canonical `YYYY-MM-DDTHH:MM:SS[.fff]` local time.
    pub time: String,

    #[serde(default)]
    pub labels: Vec<String>,

    /// Manual completion flag; always `false` for goals.
    #[serde(default)]
    pub is_complete: bool,

    /// Ids of direct dependencies, in edge order.
    #[serde(default)]
    pub dependencies: Vec<String>,
}
