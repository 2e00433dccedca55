// src/graph/mod.rs

//! Dependency graph of tasks and goals.
//!
//! - [`node`] holds the node record and its status/variant enums.
//! - [`status`] contains the per-variant status rules.
//! - [`propagation`] recomputes statuses after a change.
//! - [`reachability`] answers transitive dependency/dependent queries.
//!
//! [`Graph`] is an arena keyed by node id: nodes never own one another,
//! edges are id lists in both directions, and every mutation keeps the two
//! directions in sync and the whole graph acyclic.

pub mod node;
pub mod propagation;
pub mod reachability;
pub mod status;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::errors::{Result, TaskboardError};

pub use node::{Node, NodeId, NodeKind, Status};

/// Arena of nodes plus their insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    order: Vec<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Add a node without edges and compute its initial status.
    pub(crate) fn insert(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(TaskboardError::DuplicateNodeId(node.id));
        }

        let id = node.id.clone();
        self.order.push(id.clone());
        self.nodes.insert(id.clone(), node);
        propagation::propagate(&mut self.nodes, std::slice::from_ref(&id));
        Ok(())
    }

    /// Sever every edge of `id`, then drop it from the arena.
    ///
    /// Returns `None` if the node is not tracked.
    pub(crate) fn remove(&mut self, id: &str) -> Option<Node> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        self.delink(id).ok()?;
        self.order.retain(|n| n != id);
        self.nodes.remove(id)
    }

    fn node(&self, id: &str) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| TaskboardError::NodeNotFound(id.to_string()))
    }

    /// Make `node` depend on `dependency`.
    ///
    /// Fails without touching the graph if the edge already exists, or if
    /// `dependency` already (transitively) depends on `node`.
    pub fn add_dependency(&mut self, node: &str, dependency: &str) -> Result<()> {
        let target = self.node(node)?;
        self.node(dependency)?;

        if target.dependencies.iter().any(|d| d == dependency) {
            return Err(TaskboardError::DependencyAlreadyExists {
                node: node.to_string(),
                dependency: dependency.to_string(),
            });
        }

        if node == dependency || reachability::depends_on(&self.nodes, dependency, node) {
            return Err(TaskboardError::CircularDependency {
                node: node.to_string(),
                dependency: dependency.to_string(),
            });
        }

        if let Some(n) = self.nodes.get_mut(node) {
            n.dependencies.push(dependency.to_string());
        }
        if let Some(d) = self.nodes.get_mut(dependency) {
            d.dependents.push(node.to_string());
        }

        debug!(node, dependency, "dependency added");
        propagation::propagate(&mut self.nodes, &[node.to_string()]);
        Ok(())
    }

    /// Remove the direct edge `node -> dependency`.
    pub fn remove_dependency(&mut self, node: &str, dependency: &str) -> Result<()> {
        self.node(dependency)?;
        let target = self.node(node)?;

        if !target.dependencies.iter().any(|d| d == dependency) {
            return Err(TaskboardError::NoSuchDependency {
                node: node.to_string(),
                dependency: dependency.to_string(),
            });
        }

        self.unlink(node, dependency);

        debug!(node, dependency, "dependency removed");
        propagation::propagate(&mut self.nodes, &[node.to_string()]);
        Ok(())
    }

    /// Whether `other` is a direct or transitive dependency of `node`.
    pub fn has_dependency(&self, node: &str, other: &str) -> Result<bool> {
        self.node(node)?;
        self.node(other)?;
        Ok(reachability::depends_on(&self.nodes, node, other))
    }

    /// Every node that directly or transitively depends on `id`.
    pub fn dependent_set(&self, id: &str) -> Result<HashSet<NodeId>> {
        self.node(id)?;
        Ok(reachability::dependent_closure(&self.nodes, id))
    }

    /// Remove every edge touching `id`, in both directions.
    pub fn delink(&mut self, id: &str) -> Result<()> {
        let node = self.node(id)?;

        // Copies: unlinking mutates the live lists.
        let dependencies = node.dependencies.clone();
        let dependents = node.dependents.clone();

        for dependency in &dependencies {
            self.unlink(id, dependency);
        }
        for dependent in &dependents {
            self.unlink(dependent, id);
        }

        debug!(
            node = id,
            dependencies = dependencies.len(),
            dependents = dependents.len(),
            "node delinked"
        );

        let mut roots = Vec::with_capacity(dependents.len() + 1);
        roots.push(id.to_string());
        roots.extend(dependents);
        propagation::propagate(&mut self.nodes, &roots);
        Ok(())
    }

    /// Set the completion flag of a task that is currently in progress.
    pub fn mark_complete(&mut self, id: &str) -> Result<()> {
        let node = self.node(id)?;

        if node.is_goal() {
            return Err(TaskboardError::NotATask(id.to_string()));
        }
        if node.status != Status::InProgress {
            return Err(TaskboardError::MissingTaskReqs(id.to_string()));
        }

        self.set_completion_flag(id, true);
        Ok(())
    }

    /// Clear the completion flag of a task.
    pub fn mark_incomplete(&mut self, id: &str) -> Result<()> {
        if self.node(id)?.is_goal() {
            return Err(TaskboardError::NotATask(id.to_string()));
        }

        self.set_completion_flag(id, false);
        Ok(())
    }

    fn set_completion_flag(&mut self, id: &str, is_complete: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.kind = NodeKind::Task { is_complete };
        }
        debug!(task = id, is_complete, "completion flag changed");
        propagation::propagate(&mut self.nodes, &[id.to_string()]);
    }

    /// Drop both directions of an edge without propagating.
    fn unlink(&mut self, node: &str, dependency: &str) {
        if let Some(n) = self.nodes.get_mut(node) {
            if let Some(pos) = n.dependencies.iter().position(|d| d == dependency) {
                n.dependencies.remove(pos);
            }
        }
        if let Some(d) = self.nodes.get_mut(dependency) {
            if let Some(pos) = d.dependents.iter().position(|x| x == node) {
                d.dependents.remove(pos);
            }
        }
    }
}
