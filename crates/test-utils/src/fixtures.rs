//! Boards shared by several test files.

use crate::builders::{BoardBuilder, BuiltBoard};

/// Four tasks under one goal.
///
/// ```text
///   g0
///  |  \
/// t3  t2
/// | \ |
/// t0 t1
/// ```
pub fn diamond() -> BuiltBoard {
    BoardBuilder::new("Test Taskboard")
        .task("Task 0")
        .task("Task 1")
        .task("Task 2")
        .task("Task 3")
        .goal("Goal 0")
        .depends("Goal 0", "Task 3")
        .depends("Goal 0", "Task 2")
        .depends("Task 3", "Task 0")
        .depends("Task 3", "Task 1")
        .depends("Task 2", "Task 1")
        .build()
}

/// Two goals, four tasks, four labels, dated, with `Task 1` complete.
///
/// ```text
///   g0           2022-02-01
///  |  \
/// t3  t2   L1    2022-01-25
/// | \ |
/// t0 t1    L2    2022-01-01
///  \ /
///   g1     L3    2022-01-20
///
/// t3, t0 also carry L0
/// ```
pub fn labelled_project() -> BuiltBoard {
    BoardBuilder::new("Test Taskboard")
        .goal_at("Goal 0", "2022-02-01T00:00")
        .goal_at("Goal 1", "2022-01-20T00:00")
        .task_at("Task 0", "2022-01-01T00:00")
        .task_at("Task 1", "2022-01-01T00:00")
        .task_at("Task 2", "2022-01-25T00:00")
        .task_at("Task 3", "2022-01-25T00:00")
        .depends("Goal 0", "Task 3")
        .depends("Goal 0", "Task 2")
        .depends("Task 3", "Task 0")
        .depends("Task 3", "Task 1")
        .depends("Task 2", "Task 1")
        .depends("Goal 1", "Task 0")
        .depends("Goal 1", "Task 1")
        .label("Task 3", "Label 0")
        .label("Task 0", "Label 0")
        .label("Task 3", "Label 1")
        .label("Task 2", "Label 1")
        .label("Task 0", "Label 2")
        .label("Task 1", "Label 2")
        .label("Goal 1", "Label 3")
        .complete("Task 1")
        .build()
}
