// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::graph::NodeId;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Label \"{0}\" does not exist")]
    NoSuchLabel(String),

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node '{0}' is a goal; only tasks can be completed manually")]
    NotATask(NodeId),

    #[error("'{node}' already depends on '{dependency}'")]
    DependencyAlreadyExists { node: NodeId, dependency: NodeId },

    #[error("'{node}' does not depend on '{dependency}'")]
    NoSuchDependency { node: NodeId, dependency: NodeId },

    #[error("Making '{node}' depend on '{dependency}' would create a cycle")]
    CircularDependency { node: NodeId, dependency: NodeId },

    #[error("Task '{0}' is not in progress; its dependencies are incomplete or it is already complete")]
    MissingTaskReqs(NodeId),

    #[error("No free node id after {0} attempts")]
    IdsExhausted(usize),

    #[error("Duplicate node id in snapshot: {0}")]
    DuplicateNodeId(NodeId),

    #[error("'{node}' references unknown dependency '{dependency}'")]
    UnknownDependency { node: NodeId, dependency: NodeId },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskboardError>;
