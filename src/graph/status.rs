// src/graph/status.rs

//! Status rules for the two node variants.
//!
//! Both rules are pure functions of the direct dependencies' statuses, so
//! recomputing a node any number of times gives the same answer.

use crate::graph::node::Status;

/// Task rule.
///
/// Any unfinished dependency blocks the task (`NotStarted`) and clears its
/// completion flag. Otherwise the flag decides between `Complete` and
/// `InProgress`.
///
/// Returns the new status and the new value of the completion flag.
pub fn task_rule(is_complete: bool, dependencies: &[Status]) -> (Status, bool) {
    if dependencies.iter().any(|s| *s != Status::Complete) {
        return (Status::NotStarted, false);
    }

    if is_complete {
        (Status::Complete, true)
    } else {
        (Status::InProgress, false)
    }
}

/// Goal rule.
///
/// A goal with nothing started underneath it (including a goal with no
/// dependencies at all) is `NotStarted`; it is `Complete` once every
/// dependency is, and `InProgress` in between.
pub fn goal_rule(dependencies: &[Status]) -> Status {
    if dependencies.iter().all(|s| *s == Status::NotStarted) {
        return Status::NotStarted;
    }

    if dependencies.iter().any(|s| *s != Status::Complete) {
        Status::InProgress
    } else {
        Status::Complete
    }
}
