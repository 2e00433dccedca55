// src/snapshot/mod.rs

//! Conversion between a [`Board`] and its flat [`BoardSnapshot`].
//!
//! - [`model`] defines the serializable shape.
//! - [`timestamp`] formats and parses node times.
//! - [`validate`] checks a snapshot before it is loaded.
//! - [`codec`] carries snapshots as JSON, in memory or on disk.
//!
//! Loading happens in two passes: every node is built first with no edges,
//! then each edge is replayed through [`Board::add_dependency`], so
//! back-references and statuses come out exactly as if the board had been
//! built through the public API.

pub mod codec;
pub mod model;
pub mod timestamp;
pub mod validate;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::board::Board;
use crate::errors::Result;
use crate::graph::{Node, NodeKind};
use crate::providers::{Clock, IdSource, SystemClock, UuidIdSource};

pub use model::{BoardSnapshot, NodeSnapshot};
pub use timestamp::{format_timestamp, parse_timestamp};

fn node_snapshot(node: &Node) -> NodeSnapshot {
    NodeSnapshot {
        id: node.id().to_string(),
        name: node.name().to_string(),
        time: format_timestamp(&node.timestamp()),
        labels: node.labels().to_vec(),
        is_complete: node.is_complete(),
        dependencies: node.dependencies().to_vec(),
    }
}

impl Board {
    /// Flatten the board. Tasks and goals each keep creation order.
    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            name: self.name().to_string(),
            labels: self.labels().to_vec(),
            tasks: self.nodes().filter(|n| n.is_task()).map(node_snapshot).collect(),
            goals: self.nodes().filter(|n| n.is_goal()).map(node_snapshot).collect(),
        }
    }

    /// Rebuild a board using the system clock and UUID ids for any nodes
    /// created afterwards.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self> {
        Self::from_snapshot_with(snapshot, SystemClock, UuidIdSource)
    }

    pub fn from_snapshot_with(
        snapshot: &BoardSnapshot,
        clock: impl Clock + 'static,
        ids: impl IdSource + 'static,
    ) -> Result<Self> {
        let order = validate::validate_snapshot(snapshot)?;

        let mut board = Board::with_providers(snapshot.name.clone(), clock, ids);
        board.labels_mut().extend(snapshot.labels.iter().cloned());

        // Pass 1: nodes without edges.
        let tasks = snapshot.tasks.iter().map(|s| (s, true));
        let goals = snapshot.goals.iter().map(|s| (s, false));
        for (s, is_task) in tasks.chain(goals) {
            let kind = if is_task {
                NodeKind::Task {
                    is_complete: s.is_complete,
                }
            } else {
                NodeKind::Goal
            };
            let mut node = Node::new(
                s.id.clone(),
                s.name.clone(),
                parse_timestamp(&s.time)?,
                kind,
            );
            node.labels = s.labels.clone();
            board.graph_mut().insert(node)?;
        }

        // Pass 2: edges, dependencies first so a completed node never sees a
        // half-wired dependency.
        let dependencies: HashMap<&str, &[String]> = snapshot
            .tasks
            .iter()
            .chain(snapshot.goals.iter())
            .map(|s| (s.id.as_str(), s.dependencies.as_slice()))
            .collect();

        let mut edges = 0usize;
        for id in order {
            for dep in dependencies.get(id).copied().unwrap_or_default() {
                board.add_dependency(id, dep)?;
                edges += 1;
            }
        }

        debug!(edges, "snapshot edges replayed");
        info!(
            board = %board.name(),
            nodes = board.len(),
            labels = board.labels().len(),
            "board loaded from snapshot"
        );
        Ok(board)
    }
}
