use taskboard::errors::TaskboardError;
use taskboard::{Board, Query, SortKey};
use taskboard_test_utils::builders::BoardBuilder;

#[test]
fn label_registry_and_filters() {
    let built = BoardBuilder::new("Test Taskboard")
        .task("Task 0")
        .task("Task 1")
        .task("Task 2")
        .build();
    let [t0, t1, t2] = ["Task 0", "Task 1", "Task 2"].map(|n| built.id(n));
    let mut board = built.board;
    let names = |nodes: Vec<&taskboard::Node>| -> Vec<String> {
        nodes.iter().map(|n| n.name().to_string()).collect()
    };

    assert!(!board.has_label("Label 0"));
    assert!(board.create_label("Label 0"));
    assert!(board.has_label("Label 0"));
    assert!(!board.create_label("Label 0"));

    board.create_label("Label 1");
    board.create_label("Label 2");
    assert_eq!(board.labels(), ["Label 0", "Label 1", "Label 2"]);

    assert!(board.get(&t0).unwrap().labels().is_empty());
    assert!(!board.add_label(&t0, "Nonexistent Label", false).unwrap());
    assert!(!board.has_label("Nonexistent Label"));
    assert!(board.add_label(&t0, "Label 0", false).unwrap());
    assert_eq!(board.get(&t0).unwrap().labels(), ["Label 0"]);

    board.add_label(&t1, "Label 0", false).unwrap();
    board.add_label(&t1, "Label 1", false).unwrap();
    board.add_label(&t1, "Label 2", false).unwrap();
    board.add_label(&t2, "Label 1", false).unwrap();
    assert_eq!(board.get(&t1).unwrap().labels(), ["Label 0", "Label 1", "Label 2"]);

    assert_eq!(names(board.query(&Query::default()).unwrap()), ["Task 0", "Task 1", "Task 2"]);
    assert_eq!(
        names(
            board
                .query(&Query::new().include_label("Label 0").include_label("Label 1"))
                .unwrap()
        ),
        ["Task 0", "Task 1", "Task 2"]
    );
    assert_eq!(
        names(board.query(&Query::new().include_label("Label 0")).unwrap()),
        ["Task 0", "Task 1"]
    );
    assert_eq!(
        names(
            board
                .query(
                    &Query::new()
                        .include_label("Label 0")
                        .include_label("Label 1")
                        .exclude_label("Label 2")
                )
                .unwrap()
        ),
        ["Task 0", "Task 2"]
    );

    let t3 = board.create_task("Task 3").unwrap();
    board.add_label(&t3, "Label 0", false).unwrap();
    board.add_dependency(&t0, &t3).unwrap();
    board.add_dependency(&t1, &t3).unwrap();
    board.add_dependency(&t2, &t1).unwrap();
    board.add_dependency(&t2, &t0).unwrap();

    let by_dependents_then_name = Query::new()
        .sort_by(SortKey::Dependents)
        .sort_by(SortKey::Name)
        .include_label("Label 0");
    assert_eq!(
        names(board.query(&by_dependents_then_name).unwrap()),
        ["Task 3", "Task 0", "Task 1"]
    );

    board.get_mut(&t0).unwrap().set_name("z");
    assert_eq!(
        names(board.query(&by_dependents_then_name).unwrap()),
        ["Task 3", "Task 1", "z"]
    );

    assert!(!board.remove_label(&t1, "Nonexistent").unwrap());
    assert!(board.remove_label(&t1, "Label 2").unwrap());
    assert!(!board.get(&t1).unwrap().has_label("Label 2"));
    assert!(!board.remove_label(&t1, "Label 2").unwrap());

    assert!(!board.delete_label("Nonexistent"));
    assert!(board.delete_label("Label 0"));
    assert!(!board.get(&t0).unwrap().has_label("Label 0"));
    assert!(!board.get(&t3).unwrap().has_label("Label 0"));
    assert!(!board.has_label("Label 0"));
}

#[test]
fn add_label_can_register_on_the_fly() {
    let mut board = Board::new("b");
    let t = board.create_task("t").unwrap();

    assert!(board.add_label(&t, "fresh", true).unwrap());
    assert!(board.has_label("fresh"));
    assert_eq!(board.get(&t).unwrap().labels(), ["fresh"]);
}

#[test]
fn duplicate_labels_are_kept() {
    let mut board = Board::new("b");
    let t = board.create_task("t").unwrap();
    board.create_label("x");

    assert!(board.add_label(&t, "x", false).unwrap());
    assert!(board.add_label(&t, "x", false).unwrap());
    assert_eq!(board.get(&t).unwrap().labels(), ["x", "x"]);

    // one occurrence at a time
    assert!(board.remove_label(&t, "x").unwrap());
    assert_eq!(board.get(&t).unwrap().labels(), ["x"]);

    board.add_label(&t, "x", false).unwrap();
    assert!(board.delete_label("x"));
    assert!(board.get(&t).unwrap().labels().is_empty());
}

#[test]
fn label_operations_on_unknown_nodes_fail() {
    let mut board = Board::new("b");
    board.create_label("x");

    assert!(matches!(
        board.add_label("missing", "x", false),
        Err(TaskboardError::NodeNotFound(_))
    ));
    assert!(matches!(
        board.remove_label("missing", "x"),
        Err(TaskboardError::NodeNotFound(_))
    ));
}
