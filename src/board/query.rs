// src/board/query.rs

//! Filtering and deterministic ordering of a board's nodes.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::board::Board;
use crate::errors::{Result, TaskboardError};
use crate::graph::{Node, Status};
use crate::types::{ItemKind, SortKey};

/// Query parameters for [`Board::query`].
///
/// `Query::default()` matches every node and sorts by the canonical keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Caller-chosen sort keys, most significant first.
    pub sort_keys: Vec<SortKey>,
    /// If non-empty, a node must carry at least one of these.
    pub include_labels: Vec<String>,
    /// A node carrying any of these is dropped.
    pub exclude_labels: Vec<String>,
    pub exclude_completed: bool,
    pub exclude_not_started: bool,
    pub kind: ItemKind,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_keys.push(key);
        self
    }

    pub fn include_label(mut self, label: impl Into<String>) -> Self {
        self.include_labels.push(label.into());
        self
    }

    pub fn exclude_label(mut self, label: impl Into<String>) -> Self {
        self.exclude_labels.push(label.into());
        self
    }

    pub fn hide_completed(mut self, yes: bool) -> Self {
        self.exclude_completed = yes;
        self
    }

    pub fn hide_not_started(mut self, yes: bool) -> Self {
        self.exclude_not_started = yes;
        self
    }

    pub fn only(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Caller keys followed by every canonical key they did not mention.
    pub fn effective_sort_keys(&self) -> Vec<SortKey> {
        let mut keys = self.sort_keys.clone();
        for key in SortKey::CANONICAL {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    fn matches(&self, node: &Node) -> bool {
        let kind_ok = match self.kind {
            ItemKind::Task => node.is_task(),
            ItemKind::Goal => node.is_goal(),
            ItemKind::Any => true,
        };

        kind_ok
            && (self.include_labels.is_empty()
                || self.include_labels.iter().any(|l| node.has_label(l)))
            && !(self.exclude_completed && node.status() == Status::Complete)
            && !(self.exclude_not_started && node.status() == Status::NotStarted)
            && !self.exclude_labels.iter().any(|l| node.has_label(l))
    }
}

impl Board {
    /// Nodes matching `query`, sorted by its effective keys.
    ///
    /// Every label named in the query must be registered; otherwise the call
    /// fails with [`TaskboardError::NoSuchLabel`] before anything is filtered.
    /// The sort is stable over creation order.
    pub fn query(&self, query: &Query) -> Result<Vec<&Node>> {
        for label in query.include_labels.iter().chain(&query.exclude_labels) {
            if !self.has_label(label) {
                return Err(TaskboardError::NoSuchLabel(label.clone()));
            }
        }

        let keys = query.effective_sort_keys();
        let mut matched: Vec<&Node> = self.nodes().filter(|n| query.matches(n)).collect();

        let dependent_counts: HashMap<&str, usize> = matched
            .iter()
            .map(|n| {
                let count = self.dependent_set(n.id()).map(|s| s.len()).unwrap_or(0);
                (n.id(), count)
            })
            .collect();

        matched.sort_by(|a, b| {
            for key in &keys {
                let ord = match key {
                    SortKey::Dependents => {
                        dependent_counts[b.id()].cmp(&dependent_counts[a.id()])
                    }
                    SortKey::Time => a.timestamp().cmp(&b.timestamp()),
                    SortKey::Name => a.name().cmp(b.name()),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });

        debug!(?keys, matched = matched.len(), total = self.len(), "query evaluated");
        Ok(matched)
    }
}
