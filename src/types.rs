// src/types.rs

//! Small enums shared by the query engine, the config file and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Built-in sort keys understood by [`crate::board::Query`].
///
/// When a query does not name every key, the missing ones are appended in
/// declaration order, so `Dependents`, `Time`, `Name` is also the default
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending size of the transitive dependent set.
    Dependents,
    /// Ascending timestamp.
    Time,
    /// Ascending name.
    Name,
}

impl SortKey {
    pub const CANONICAL: [SortKey; 3] = [SortKey::Dependents, SortKey::Time, SortKey::Name];
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dependents" => Ok(SortKey::Dependents),
            "time" => Ok(SortKey::Time),
            "name" => Ok(SortKey::Name),
            other => Err(format!(
                "invalid sort key: {other} (expected \"dependents\", \"time\" or \"name\")"
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Dependents => "dependents",
            SortKey::Time => "time",
            SortKey::Name => "name",
        };
        f.write_str(s)
    }
}

/// Which node variants a query should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Task,
    Goal,
    #[default]
    Any,
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "task" | "tasks" => Ok(ItemKind::Task),
            "goal" | "goals" => Ok(ItemKind::Goal),
            "any" | "all" => Ok(ItemKind::Any),
            other => Err(format!(
                "invalid item kind: {other} (expected \"task\", \"goal\" or \"any\")"
            )),
        }
    }
}
