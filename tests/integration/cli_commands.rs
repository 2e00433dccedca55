// tests/integration/cli_commands.rs

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;
use taskboard::Status;
use taskboard::cli::CliArgs;
use taskboard::run_with_output;
use taskboard::snapshot::codec::load_board;

/// A scratch directory holding a board file and an optional config.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn board(&self) -> PathBuf {
        self.dir.path().join("board.json")
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("Taskboard.toml")
    }

    fn write_config(&self, toml: &str) {
        fs::write(self.config(), toml).unwrap();
    }

    /// Run one command and return its stdout.
    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let config = self.config();
        let board = self.board();
        let mut argv = vec![
            "taskboard",
            "--config",
            config.to_str().unwrap(),
            "--board",
            board.to_str().unwrap(),
        ];
        argv.extend_from_slice(args);

        let parsed = CliArgs::try_parse_from(argv)?;
        let mut out = Vec::new();
        run_with_output(parsed, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn ok(&self, args: &[&str]) -> String {
        self.run(args)
            .unwrap_or_else(|e| panic!("`{}` failed: {e:?}", args.join(" ")))
    }

    /// Create a node and return the id it printed.
    fn create(&self, kind: &str, name: &str, at: &str) -> String {
        self.ok(&[kind, name, "--at", at]).trim().to_string()
    }
}

fn first_column(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect()
}

fn status_of(path: &Path, id: &str) -> Status {
    load_board(path).unwrap().get(id).unwrap().status()
}

#[test]
fn init_refuses_to_overwrite() {
    let ws = Workspace::new();

    ws.ok(&["init", "--name", "Release"]);
    assert_eq!(load_board(ws.board()).unwrap().name(), "Release");

    assert!(ws.run(&["init"]).is_err());
}

#[test]
fn commands_before_init_fail() {
    let ws = Workspace::new();
    assert!(ws.run(&["list"]).is_err());
}

#[test]
fn build_complete_and_list_a_board() {
    let ws = Workspace::new();
    ws.ok(&["init"]);

    let write = ws.create("task", "Write", "2022-01-01T00:00");
    let review = ws.create("task", "Review", "2022-01-02T00:00");
    let ship = ws.create("goal", "Ship", "2022-01-03T00:00");
    assert_eq!(write.len(), 8);

    ws.ok(&["depend", &ship, &review]);
    ws.ok(&["depend", &review, &write]);
    assert_eq!(status_of(&ws.board(), &review), Status::NotStarted);

    ws.ok(&["complete", &write]);
    assert_eq!(status_of(&ws.board(), &write), Status::Complete);
    assert_eq!(status_of(&ws.board(), &review), Status::InProgress);
    assert_eq!(status_of(&ws.board(), &ship), Status::InProgress);

    let listed = ws.ok(&["list"]);
    assert_eq!(first_column(&listed), [&write, &review, &ship]);
    assert!(listed.lines().next().unwrap().contains("complete"));

    let by_name = ws.ok(&["list", "--sort", "name"]);
    assert_eq!(first_column(&by_name), [&review, &ship, &write]);

    let open = ws.ok(&["list", "--hide-completed", "--kind", "task"]);
    assert_eq!(first_column(&open), [&review]);

    let shown = ws.ok(&["show", &review]);
    assert!(shown.contains("depends on:"));
    assert!(shown.contains("needed by:"));
    assert!(shown.contains("2022-01-02T00:00:00"));
}

#[test]
fn invalid_operations_leave_the_board_untouched() {
    let ws = Workspace::new();
    ws.ok(&["init"]);

    let a = ws.create("task", "A", "2022-01-01T00:00");
    let g = ws.create("goal", "G", "2022-01-01T00:00");
    ws.ok(&["depend", &g, &a]);
    let before = fs::read_to_string(ws.board()).unwrap();

    assert!(ws.run(&["depend", &a, &g]).is_err());
    assert!(ws.run(&["depend", &g, &a]).is_err());
    assert!(ws.run(&["complete", &g]).is_err());
    assert!(ws.run(&["undepend", &a, &g]).is_err());
    assert!(ws.run(&["remove", "missing"]).is_err());
    assert!(ws.run(&["task", "Late", "--at", "tomorrow"]).is_err());

    assert_eq!(fs::read_to_string(ws.board()).unwrap(), before);
}

#[test]
fn labels_filter_the_listing() {
    let ws = Workspace::new();
    ws.ok(&["init"]);

    let api = ws.create("task", "API", "2022-01-01T00:00");
    let ui = ws.create("task", "UI", "2022-01-02T00:00");

    assert_eq!(ws.ok(&["label", "add", &api, "backend"]).trim(), "nothing changed");
    ws.ok(&["label", "add", &api, "backend", "--create"]);
    ws.ok(&["label", "create", "frontend"]);
    ws.ok(&["label", "add", &ui, "frontend"]);

    let backend = ws.ok(&["list", "--include", "backend"]);
    assert_eq!(first_column(&backend), [&api]);
    assert!(backend.contains("[backend]"));

    let not_backend = ws.ok(&["list", "--exclude", "backend"]);
    assert_eq!(first_column(&not_backend), [&ui]);

    assert!(ws.run(&["list", "--include", "nope"]).is_err());

    ws.ok(&["label", "delete", "backend"]);
    let board = load_board(ws.board()).unwrap();
    assert_eq!(board.labels(), ["frontend"]);
    assert!(board.get(&api).unwrap().labels().is_empty());

    assert_eq!(ws.ok(&["label", "remove", &api, "frontend"]).trim(), "nothing changed");
}

#[test]
fn config_supplies_list_defaults() {
    let ws = Workspace::new();
    ws.write_config("[query]\nsort = [\"name\"]\nhide_completed = true\n");
    ws.ok(&["init"]);

    let b = ws.create("task", "B", "2022-01-01T00:00");
    let a = ws.create("task", "A", "2022-01-02T00:00");
    let c = ws.create("task", "C", "2022-01-03T00:00");
    ws.ok(&["complete", &c]);

    assert_eq!(first_column(&ws.ok(&["list"])), [&a, &b]);
    assert_eq!(first_column(&ws.ok(&["list", "--sort", "time"])), [&b, &a]);
}

#[test]
fn rename_and_remove() {
    let ws = Workspace::new();
    ws.ok(&["init"]);

    let a = ws.create("task", "A", "2022-01-01T00:00");
    let b = ws.create("task", "B", "2022-01-01T00:00");
    ws.ok(&["depend", &b, &a]);

    ws.ok(&["rename", &a, "Renamed"]);
    ws.ok(&["remove", &a]);

    let board = load_board(ws.board()).unwrap();
    assert!(!board.contains(&a));
    assert!(board.get(&b).unwrap().dependencies().is_empty());
    assert_eq!(board.get(&b).unwrap().status(), Status::InProgress);
}
