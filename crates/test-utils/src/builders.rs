#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDateTime;
use taskboard::board::Board;
use taskboard::graph::{Node, NodeId};
use taskboard::providers::mock::{FixedClock, SequenceIdSource};
use taskboard::snapshot::parse_timestamp;

/// Parse a `YYYY-MM-DDTHH:MM[:SS]` literal.
pub fn at(s: &str) -> NaiveDateTime {
    parse_timestamp(s).expect("valid timestamp literal")
}

/// Default time of the builder's clock.
pub const EPOCH: &str = "2022-01-01T00:00:00";

/// Builds a board by node *name*, so tests never handle generated ids.
///
/// Ids come from a [`SequenceIdSource`], which makes them deterministic:
/// `00000001`, `00000002`, … in creation order.
pub struct BoardBuilder {
    board: Board,
    clock: FixedClock,
    ids: SequenceIdSource,
    names: HashMap<String, NodeId>,
}

impl BoardBuilder {
    pub fn new(name: &str) -> Self {
        let clock = FixedClock::new(at(EPOCH));
        let ids = SequenceIdSource::new();
        Self {
            board: Board::with_providers(name, clock.clone(), ids.clone()),
            clock,
            ids,
            names: HashMap::new(),
        }
    }

    /// Task stamped with the builder clock.
    pub fn task(mut self, name: &str) -> Self {
        let id = self
            .board
            .create_task(name)
            .expect("builder node must be created");
        self.names.insert(name.to_string(), id);
        self
    }

    pub fn task_at(mut self, name: &str, time: &str) -> Self {
        let id = self
            .board
            .create_task_at(name, at(time))
            .expect("builder node must be created");
        self.names.insert(name.to_string(), id);
        self
    }

    /// Goal stamped with the builder clock.
    pub fn goal(mut self, name: &str) -> Self {
        let id = self
            .board
            .create_goal(name)
            .expect("builder node must be created");
        self.names.insert(name.to_string(), id);
        self
    }

    pub fn goal_at(mut self, name: &str, time: &str) -> Self {
        let id = self
            .board
            .create_goal_at(name, at(time))
            .expect("builder node must be created");
        self.names.insert(name.to_string(), id);
        self
    }

    pub fn depends(mut self, node: &str, dependency: &str) -> Self {
        let (node, dependency) = (self.id(node), self.id(dependency));
        self.board
            .add_dependency(&node, &dependency)
            .expect("builder dependency must be valid");
        self
    }

    /// Attach a label, registering it if needed.
    pub fn label(mut self, node: &str, label: &str) -> Self {
        let node = self.id(node);
        self.board
            .add_label(&node, label, true)
            .expect("builder node must exist");
        self
    }

    pub fn complete(mut self, task: &str) -> Self {
        let task = self.id(task);
        self.board
            .mark_complete(&task)
            .expect("builder task must be in progress");
        self
    }

    fn id(&self, name: &str) -> NodeId {
        self.names
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("no node named {name:?} in builder"))
    }

    pub fn build(self) -> BuiltBoard {
        BuiltBoard {
            board: self.board,
            clock: self.clock,
            ids: self.ids,
            names: self.names,
        }
    }
}

/// A board plus the name → id mapping used to build it.
pub struct BuiltBoard {
    pub board: Board,
    pub clock: FixedClock,
    pub ids: SequenceIdSource,
    names: HashMap<String, NodeId>,
}

impl BuiltBoard {
    pub fn id(&self, name: &str) -> NodeId {
        self.names
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("no node named {name:?} on board"))
    }

    pub fn node(&self, name: &str) -> &Node {
        self.board
            .get(&self.id(name))
            .unwrap_or_else(|| panic!("node {name:?} was removed"))
    }

    /// Ids for several names, in the order given.
    pub fn ids(&self, names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|n| self.id(n)).collect()
    }

    /// Names of `nodes`, for readable assertions on query results.
    pub fn names_of(&self, nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.name().to_string()).collect()
    }
}
