// tests/integration/config_loading.rs

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use taskboard::SortKey;
use taskboard::config::{load_and_validate, load_or_default};
use taskboard::errors::TaskboardError;

#[test]
fn full_config_is_read() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[board]
path = "plans/release.json"
name = "Release"

[query]
sort = ["time", "name"]
hide_completed = true
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.board.path, PathBuf::from("plans/release.json"));
    assert_eq!(cfg.board.name, "Release");
    assert_eq!(cfg.query.sort, [SortKey::Time, SortKey::Name]);
    assert!(cfg.query.hide_completed);
}

#[test]
fn sections_default_when_absent() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[query]\nhide_completed = false\n").unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.board.path, PathBuf::from("taskboard.json"));
    assert_eq!(cfg.board.name, "Taskboard");
    assert!(cfg.query.sort.is_empty());
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_or_default(dir.path().join("Taskboard.toml")).unwrap();

    assert_eq!(cfg.board.path, PathBuf::from("taskboard.json"));
    assert!(!cfg.query.hide_completed);
}

#[test]
fn repeated_sort_key_is_a_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[query]\nsort = [\"name\", \"time\", \"name\"]\n").unwrap();

    match load_and_validate(file.path()) {
        Err(TaskboardError::ConfigError(msg)) => {
            assert!(msg.contains("'name'"), "unexpected message: {msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_board_path_is_a_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[board]\npath = \"\"\n").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskboardError::ConfigError(_))
    ));
}

#[test]
fn unknown_sort_key_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[query]\nsort = [\"priority\"]\n").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskboardError::TomlError(_))
    ));
}
