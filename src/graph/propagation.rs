// src/graph/propagation.rs

//! Cascading status recomputation.
//!
//! A change to one node can change the status of everything that depends on
//! it. Instead of recursing into dependents (which revisits shared
//! descendants once per path), we collect the affected subgraph and
//! recompute it in dependency order, so every node is recomputed exactly
//! once and only after all of its inputs are final.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::trace;

use crate::graph::node::{Node, NodeId, Status};

/// Recompute `roots` and all of their transitive dependents.
///
/// Unknown ids in `roots` are ignored.
pub fn propagate(nodes: &mut HashMap<NodeId, Node>, roots: &[NodeId]) {
    let affected = affected_subgraph(nodes, roots);
    if affected.is_empty() {
        return;
    }

    let members: HashSet<&str> = affected.iter().map(String::as_str).collect();

    // In-degree counts only edges that stay inside the affected subgraph;
    // everything outside it is already final.
    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    for id in &affected {
        let count = nodes
            .get(id)
            .map(|n| {
                n.dependencies
                    .iter()
                    .filter(|d| members.contains(d.as_str()))
                    .count()
            })
            .unwrap_or(0);
        in_degree.insert(id.as_str(), count);
    }

    let mut queue: VecDeque<NodeId> = affected
        .iter()
        .filter(|id| in_degree.get(id.as_str()) == Some(&0))
        .cloned()
        .collect();

    let mut recomputed = 0usize;

    while let Some(id) = queue.pop_front() {
        let statuses: Vec<Status> = match nodes.get(&id) {
            Some(node) => node
                .dependencies
                .iter()
                .filter_map(|d| nodes.get(d).map(Node::status))
                .collect(),
            None => continue,
        };

        let dependents = match nodes.get_mut(&id) {
            Some(node) => {
                let before = node.status;
                if node.recompute(&statuses) {
                    trace!(node = %id, from = %before, to = %node.status, "status changed");
                }
                node.dependents.clone()
            }
            None => continue,
        };
        recomputed += 1;

        for dependent in dependents {
            if let Some(degree) = in_degree.get_mut(dependent.as_str()) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(dependent);
                }
            }
        }
    }

    trace!(
        roots = roots.len(),
        affected = affected.len(),
        recomputed,
        "propagation finished"
    );
}

/// The roots plus everything reachable from them over dependent edges, in
/// discovery order and without duplicates.
fn affected_subgraph(nodes: &HashMap<NodeId, Node>, roots: &[NodeId]) -> Vec<NodeId> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut ordered = Vec::new();
    let mut stack: Vec<NodeId> = roots.iter().rev().cloned().collect();

    while let Some(id) = stack.pop() {
        let Some(node) = nodes.get(&id) else {
            continue;
        };
        if !seen.insert(id.clone()) {
            continue;
        }
        stack.extend(node.dependents.iter().rev().cloned());
        ordered.push(id);
    }

    ordered
}
