// src/graph/reachability.rs

//! Transitive walks over the dependency and dependent edges.

use std::collections::{HashMap, HashSet};

use crate::graph::node::{Node, NodeId};

/// Whether `target` is reachable from `from` by following dependency edges.
///
/// `from` itself is not considered reachable unless a path leads back to it.
pub fn depends_on(nodes: &HashMap<NodeId, Node>, from: &str, target: &str) -> bool {
    let mut stack: Vec<&str> = match nodes.get(from) {
        Some(node) => node.dependencies.iter().map(String::as_str).collect(),
        None => return false,
    };
    let mut visited: HashSet<&str> = HashSet::new();

    while let Some(id) = stack.pop() {
        if id == target {
            return true;
        }
        if !visited.insert(id) {
            continue;
        }
        if let Some(node) = nodes.get(id) {
            stack.extend(node.dependencies.iter().map(String::as_str));
        }
    }

    false
}

/// Every node reachable from `from` by following dependent edges.
///
/// The result does not contain `from` (the graph is acyclic).
pub fn dependent_closure(nodes: &HashMap<NodeId, Node>, from: &str) -> HashSet<NodeId> {
    let mut closure: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<&str> = match nodes.get(from) {
        Some(node) => node.dependents.iter().map(String::as_str).collect(),
        None => return closure,
    };

    while let Some(id) = stack.pop() {
        if !closure.insert(id.to_string()) {
            continue;
        }
        if let Some(node) = nodes.get(id) {
            stack.extend(node.dependents.iter().map(String::as_str));
        }
    }

    closure
}
