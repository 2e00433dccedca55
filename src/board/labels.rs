// src/board/labels.rs

//! Label registry.
//!
//! A label must be registered on the board before it can be attached to a
//! node. Attaching the same label twice keeps both entries; `remove_label`
//! takes off one of them and `delete_label` takes off all of them.

use tracing::debug;

use crate::board::Board;
use crate::errors::{Result, TaskboardError};

impl Board {
    /// Registered labels, in registration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    /// Register a label. Returns `false` if it already exists.
    pub fn create_label(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_label(&name) {
            return false;
        }

        debug!(label = %name, "label created");
        self.labels.push(name);
        true
    }

    /// Attach a label to a node.
    ///
    /// An unregistered label is only accepted with `create_if_missing`, in
    /// which case it is registered first. Returns `false` (and changes
    /// nothing) when the label is unknown and may not be created.
    pub fn add_label(&mut self, node: &str, name: &str, create_if_missing: bool) -> Result<bool> {
        if !self.contains(node) {
            return Err(TaskboardError::NodeNotFound(node.to_string()));
        }

        if !self.has_label(name) {
            if !create_if_missing {
                return Ok(false);
            }
            self.create_label(name);
        }

        if let Some(n) = self.graph.get_mut(node) {
            n.labels.push(name.to_string());
        }
        debug!(node, label = name, "label attached");
        Ok(true)
    }

    /// Detach one occurrence of a label from a node.
    ///
    /// Returns `false` if the label is not registered or the node does not
    /// carry it.
    pub fn remove_label(&mut self, node: &str, name: &str) -> Result<bool> {
        if !self.contains(node) {
            return Err(TaskboardError::NodeNotFound(node.to_string()));
        }
        if !self.has_label(name) {
            return Ok(false);
        }

        let removed = self
            .graph
            .get_mut(node)
            .and_then(|n| {
                let pos = n.labels.iter().position(|l| l == name)?;
                n.labels.remove(pos);
                Some(())
            })
            .is_some();

        if removed {
            debug!(node, label = name, "label detached");
        }
        Ok(removed)
    }

    /// Unregister a label and strip it from every node.
    pub fn delete_label(&mut self, name: &str) -> bool {
        if !self.has_label(name) {
            return false;
        }

        let carriers: Vec<String> = self
            .nodes()
            .filter(|n| n.has_label(name))
            .map(|n| n.id.clone())
            .collect();

        for id in &carriers {
            if let Some(n) = self.graph.get_mut(id) {
                n.labels.retain(|l| l != name);
            }
        }
        self.labels.retain(|l| l != name);

        debug!(label = name, nodes = carriers.len(), "label deleted");
        true
    }
}
