// src/snapshot/validate.rs

//! Structural checks run on a snapshot before any node is built.

use std::collections::HashSet;

use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graphmap::DiGraphMap;

use crate::errors::{Result, TaskboardError};
use crate::snapshot::model::{BoardSnapshot, NodeSnapshot};

/// Validate a snapshot and return its node ids in dependency order
/// (every node after all of its dependencies).
///
/// Checks, in order:
/// - ids are unique across tasks and goals,
/// - every dependency id refers to a node in the snapshot,
/// - no node depends on itself,
/// - the dependency relation is acyclic.
pub fn validate_snapshot(snapshot: &BoardSnapshot) -> Result<Vec<&str>> {
    ensure_unique_ids(snapshot)?;
    validate_dependency_refs(snapshot)?;
    dependency_order(snapshot)
}

fn all_nodes(snapshot: &BoardSnapshot) -> impl Iterator<Item = &NodeSnapshot> {
    snapshot.tasks.iter().chain(snapshot.goals.iter())
}

fn ensure_unique_ids(snapshot: &BoardSnapshot) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for node in all_nodes(snapshot) {
        if !seen.insert(node.id.as_str()) {
            return Err(TaskboardError::DuplicateNodeId(node.id.clone()));
        }
    }
    Ok(())
}

fn validate_dependency_refs(snapshot: &BoardSnapshot) -> Result<()> {
    let ids: HashSet<&str> = all_nodes(snapshot).map(|n| n.id.as_str()).collect();

    for node in all_nodes(snapshot) {
        for dep in &node.dependencies {
            if !ids.contains(dep.as_str()) {
                return Err(TaskboardError::UnknownDependency {
                    node: node.id.clone(),
                    dependency: dep.clone(),
                });
            }
            if dep == &node.id {
                return Err(TaskboardError::CircularDependency {
                    node: node.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

fn dependency_order(snapshot: &BoardSnapshot) -> Result<Vec<&str>> {
    // Edge direction: dependency -> dependent, so a topological order lists
    // dependencies first.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for node in all_nodes(snapshot) {
        graph.add_node(node.id.as_str());
    }
    for node in all_nodes(snapshot) {
        for dep in &node.dependencies {
            graph.add_edge(dep.as_str(), node.id.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(order) => Ok(order),
        Err(cycle) => {
            let id = cycle.node_id();
            // Name the edge that closes the cycle: a dependency reachable
            // again from the node itself.
            let dependency = all_nodes(snapshot)
                .find(|n| n.id == id)
                .and_then(|n| {
                    n.dependencies
                        .iter()
                        .find(|d| has_path_connecting(&graph, id, d.as_str(), None))
                })
                .map(|d| d.to_string())
                .unwrap_or_else(|| id.to_string());

            Err(TaskboardError::CircularDependency {
                node: id.to_string(),
                dependency,
            })
        }
    }
}
