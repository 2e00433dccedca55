// src/graph/node.rs

//! Node record shared by tasks and goals.

use std::fmt;

use chrono::NaiveDateTime;

use crate::graph::status::{goal_rule, task_rule};

/// Canonical node identifier type used throughout the crate.
pub type NodeId = String;

/// Derived completion status of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    NotStarted,
    InProgress,
    Complete,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::NotStarted => "not started",
            Status::InProgress => "in progress",
            Status::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// The closed set of node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A unit of work that is completed by hand once its dependencies are done.
    Task { is_complete: bool },
    /// A milestone whose status is derived entirely from its dependencies.
    Goal,
}

/// A task or goal stored in the board's arena.
///
/// Edges are kept as id lists in both directions. They, the labels and the
/// status are only ever changed by [`crate::graph::Graph`] and
/// [`crate::board::Board`], which keep `dependents` the exact inverse of
/// `dependencies`.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) timestamp: NaiveDateTime,
    pub(crate) status: Status,
    pub(crate) kind: NodeKind,
    pub(crate) labels: Vec<String>,
    /// Nodes this one requires, in the order the edges were added.
    pub(crate) dependencies: Vec<NodeId>,
    /// Nodes that require this one.
    pub(crate) dependents: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: String, timestamp: NaiveDateTime, kind: NodeKind) -> Self {
        Self {
            id,
            name,
            timestamp,
            status: Status::NotStarted,
            kind,
            labels: Vec::new(),
            dependencies: Vec::new(),
            dependents: Vec::new(),
        }
    }

    pub(crate) fn task(id: NodeId, name: String, timestamp: NaiveDateTime) -> Self {
        Self::new(id, name, timestamp, NodeKind::Task { is_complete: false })
    }

    pub(crate) fn goal(id: NodeId, name: String, timestamp: NaiveDateTime) -> Self {
        Self::new(id, name, timestamp, NodeKind::Goal)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: NaiveDateTime) {
        self.timestamp = timestamp;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_task(&self) -> bool {
        matches!(self.kind, NodeKind::Task { .. })
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.kind, NodeKind::Goal)
    }

    /// The manual completion flag. Always `false` for goals.
    pub fn is_complete(&self) -> bool {
        matches!(self.kind, NodeKind::Task { is_complete: true })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn dependencies(&self) -> &[NodeId] {
        &self.dependencies
    }

    pub fn dependents(&self) -> &[NodeId] {
        &self.dependents
    }

    /// Re-derive this node's status from the current statuses of its direct
    /// dependencies. Returns `true` if the status changed.
    pub(crate) fn recompute(&mut self, dependency_statuses: &[Status]) -> bool {
        let before = self.status;

        self.status = match self.kind {
            NodeKind::Task { is_complete } => {
                let (status, still_complete) = task_rule(is_complete, dependency_statuses);
                self.kind = NodeKind::Task {
                    is_complete: still_complete,
                };
                status
            }
            NodeKind::Goal => goal_rule(dependency_statuses),
        };

        before != self.status
    }
}
