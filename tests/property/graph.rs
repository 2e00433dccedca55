// tests/property/graph.rs

use std::collections::HashSet;

use proptest::prelude::*;
use taskboard::graph::status::{goal_rule, task_rule};
use taskboard::providers::mock::{FixedClock, SequenceIdSource};
use taskboard::{Board, NodeId, NodeKind, Status};
use taskboard::errors::TaskboardError;
use taskboard_test_utils::builders::{EPOCH, at};

/// A random board shape: per node, whether it is a goal and which earlier
/// nodes it depends on.
#[derive(Debug, Clone)]
struct Shape {
    nodes: Vec<(bool, Vec<usize>)>,
}

// Acyclic by construction: node N may only depend on nodes 0..N-1.
fn shape_strategy(max_nodes: usize) -> impl Strategy<Value = Shape> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        proptest::collection::vec(
            (
                any::<bool>(),
                proptest::collection::vec(any::<usize>(), 0..num_nodes),
            ),
            num_nodes,
        )
        .prop_map(|raw| {
            let nodes = raw
                .into_iter()
                .enumerate()
                .map(|(i, (is_goal, potential))| {
                    let mut deps: Vec<usize> = Vec::new();
                    if i > 0 {
                        for d in potential {
                            let d = d % i;
                            if !deps.contains(&d) {
                                deps.push(d);
                            }
                        }
                    }
                    (is_goal, deps)
                })
                .collect();
            Shape { nodes }
        })
    })
}

fn build(shape: &Shape) -> (Board, Vec<NodeId>) {
    let mut board = Board::with_providers(
        "prop",
        FixedClock::new(at(EPOCH)),
        SequenceIdSource::new(),
    );

    let mut ids: Vec<NodeId> = Vec::new();
    for (i, (is_goal, deps)) in shape.nodes.iter().enumerate() {
        let name = format!("node_{i}");
        let id = if *is_goal {
            board.create_goal(name).unwrap()
        } else {
            board.create_task(name).unwrap()
        };
        for d in deps {
            board.add_dependency(&id, &ids[*d]).unwrap();
        }
        ids.push(id);
    }
    (board, ids)
}

/// Flip the completion flag of every task named by `toggles`, ignoring the
/// ones that are not eligible.
fn toggle(board: &mut Board, ids: &[NodeId], toggles: &[usize]) {
    for t in toggles {
        let id = &ids[t % ids.len()];
        let Some(node) = board.get(id) else { continue };
        match (node.kind(), node.status()) {
            (NodeKind::Task { is_complete: true }, _) => {
                board.mark_incomplete(id).unwrap();
            }
            (NodeKind::Task { .. }, Status::InProgress) => {
                board.mark_complete(id).unwrap();
            }
            _ => {}
        }
    }
}

fn assert_invariants(board: &Board) {
    for node in board.nodes() {
        for dep in node.dependencies() {
            let d = board.get(dep).expect("dependency is tracked");
            assert!(d.dependents().contains(&node.id().to_string()));
        }
        for dependent in node.dependents() {
            let d = board.get(dependent).expect("dependent is tracked");
            assert!(d.dependencies().contains(&node.id().to_string()));
        }

        let unique: HashSet<&NodeId> = node.dependencies().iter().collect();
        assert_eq!(unique.len(), node.dependencies().len());

        let statuses: Vec<Status> = node
            .dependencies()
            .iter()
            .map(|d| board.get(d).unwrap().status())
            .collect();

        match node.kind() {
            NodeKind::Task { is_complete } => {
                assert_eq!(
                    (node.status(), is_complete),
                    task_rule(is_complete, &statuses),
                    "{}",
                    node.name()
                );
            }
            NodeKind::Goal => {
                assert_eq!(node.status(), goal_rule(&statuses), "{}", node.name());
            }
        }
    }
}

proptest! {
    #[test]
    fn statuses_follow_the_rules_after_any_toggles(
        shape in shape_strategy(10),
        toggles in proptest::collection::vec(any::<usize>(), 0..20),
    ) {
        let (mut board, ids) = build(&shape);
        assert_invariants(&board);

        toggle(&mut board, &ids, &toggles);
        assert_invariants(&board);
    }

    #[test]
    fn closing_a_path_is_always_rejected(
        shape in shape_strategy(10),
        pick in any::<usize>(),
    ) {
        let (mut board, ids) = build(&shape);
        let from = &ids[pick % ids.len()];

        let dependents = board.dependent_set(from).unwrap();
        for dependent in &dependents {
            prop_assert!(
                matches!(
                    board.add_dependency(from, dependent),
                    Err(TaskboardError::CircularDependency { .. })
                ),
                "{} -> {} should close a cycle",
                from,
                dependent
            );
        }
        prop_assert!(
            matches!(
                board.add_dependency(from, from),
                Err(TaskboardError::CircularDependency { .. })
            ),
            "{} -> itself should be rejected",
            from
        );
        prop_assert!(!dependents.contains(from));
    }

    #[test]
    fn removal_keeps_edges_consistent(
        shape in shape_strategy(10),
        toggles in proptest::collection::vec(any::<usize>(), 0..20),
        victim in any::<usize>(),
    ) {
        let (mut board, ids) = build(&shape);
        toggle(&mut board, &ids, &toggles);

        let victim = &ids[victim % ids.len()];
        prop_assert!(board.remove_object(victim));
        prop_assert!(!board.contains(victim));
        prop_assert_eq!(board.len(), ids.len() - 1);

        assert_invariants(&board);
    }

    #[test]
    fn snapshot_reload_is_a_fixed_point(
        shape in shape_strategy(10),
        toggles in proptest::collection::vec(any::<usize>(), 0..20),
    ) {
        let (mut board, ids) = build(&shape);
        toggle(&mut board, &ids, &toggles);

        let snapshot = board.to_snapshot();
        let reloaded = Board::from_snapshot_with(
            &snapshot,
            FixedClock::new(at(EPOCH)),
            SequenceIdSource::new(),
        )
        .unwrap();

        prop_assert_eq!(reloaded.to_snapshot(), snapshot);
        for id in &ids {
            prop_assert_eq!(
                reloaded.get(id).unwrap().status(),
                board.get(id).unwrap().status()
            );
        }
    }
}
