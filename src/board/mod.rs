// src/board/mod.rs

//! The board: owner of every node, the label registry, and the id/time
//! providers.
//!
//! - [`labels`] implements the label registry operations.
//! - [`query`] implements filtering and multi-key sorting.
//!
//! Edge and completion operations are addressed by node id and delegate to
//! the underlying [`Graph`].

pub mod labels;
pub mod query;

use std::collections::HashSet;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::errors::{Result, TaskboardError};
use crate::graph::{Graph, Node, NodeId};
use crate::providers::{Clock, IdSource, SystemClock, UuidIdSource};

pub use query::Query;

/// Length of the short id prefix handed out when it is free.
pub const SHORT_ID_LEN: usize = 8;

/// Draws from the id source before node creation fails.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// A named collection of tasks and goals.
#[derive(Debug)]
pub struct Board {
    name: String,
    graph: Graph,
    labels: Vec<String>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl Board {
    /// An empty board using the system clock and random UUID ids.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_providers(name, SystemClock, UuidIdSource)
    }

    /// An empty board with injected time and id providers.
    pub fn with_providers(
        name: impl Into<String>,
        clock: impl Clock + 'static,
        ids: impl IdSource + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            graph: Graph::new(),
            labels: Vec::new(),
            clock: Box::new(clock),
            ids: Box::new(ids),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.graph.contains(id)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.graph.get(id)
    }

    /// Mutable access for renaming and re-timestamping a node.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.graph.get_mut(id)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.iter()
    }

    /// Create a task timestamped with the board's clock.
    pub fn create_task(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let now = self.clock.now();
        self.create_task_at(name, now)
    }

    pub fn create_task_at(
        &mut self,
        name: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Result<NodeId> {
        let id = self.allocate_id()?;
        self.register(Node::task(id, name.into(), timestamp))
    }

    /// Create a goal timestamped with the board's clock.
    pub fn create_goal(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let now = self.clock.now();
        self.create_goal_at(name, now)
    }

    pub fn create_goal_at(
        &mut self,
        name: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Result<NodeId> {
        let id = self.allocate_id()?;
        self.register(Node::goal(id, name.into(), timestamp))
    }

    fn register(&mut self, node: Node) -> Result<NodeId> {
        let id = node.id.clone();
        let (name, task) = (node.name.clone(), node.is_task());
        self.graph.insert(node)?;
        debug!(id = %id, name = %name, task, "node created");
        Ok(id)
    }

    /// Pick an id for a new node.
    ///
    /// The leading [`SHORT_ID_LEN`] characters of a fresh id are used when no
    /// tracked node has that id yet; otherwise the full id is kept. This only
    /// compares against ids assigned so far, so a full id created later may
    /// still share a prefix with a short one.
    ///
    /// A source that keeps producing taken ids is given up on after
    /// [`MAX_ID_ATTEMPTS`] draws.
    fn allocate_id(&self) -> Result<NodeId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let full = self.ids.generate();
            let short: String = full.chars().take(SHORT_ID_LEN).collect();

            if !self.graph.contains(&short) {
                return Ok(short);
            }
            if !self.graph.contains(&full) {
                return Ok(full);
            }

            warn!(id = %full, "generated id already in use; generating another");
        }

        Err(TaskboardError::IdsExhausted(MAX_ID_ATTEMPTS))
    }

    /// Sever all edges of a node and drop it.
    ///
    /// Returns `false` if the node is not on this board.
    pub fn remove_object(&mut self, id: &str) -> bool {
        match self.graph.remove(id) {
            Some(node) => {
                debug!(id = %node.id, name = %node.name, "node removed");
                true
            }
            None => false,
        }
    }

    pub fn add_dependency(&mut self, node: &str, dependency: &str) -> Result<()> {
        self.graph.add_dependency(node, dependency)
    }

    pub fn remove_dependency(&mut self, node: &str, dependency: &str) -> Result<()> {
        self.graph.remove_dependency(node, dependency)
    }

    pub fn has_dependency(&self, node: &str, other: &str) -> Result<bool> {
        self.graph.has_dependency(node, other)
    }

    pub fn dependent_set(&self, id: &str) -> Result<HashSet<NodeId>> {
        self.graph.dependent_set(id)
    }

    pub fn delink(&mut self, id: &str) -> Result<()> {
        self.graph.delink(id)
    }

    pub fn mark_complete(&mut self, task: &str) -> Result<()> {
        self.graph.mark_complete(task)
    }

    pub fn mark_incomplete(&mut self, task: &str) -> Result<()> {
        self.graph.mark_incomplete(task)
    }

    pub(crate) fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub(crate) fn labels_mut(&mut self) -> &mut Vec<String> {
        &mut self.labels
    }
}
