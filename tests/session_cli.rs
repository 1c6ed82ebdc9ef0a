#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tasks_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("tasks"));
    cmd.env("TASKS_HOME", home.path().as_os_str())
        .env("NO_COLOR", "1");
    cmd
}

fn saved(home: &TempDir, name: &str) -> serde_json::Value {
    let content = fs::read_to_string(home.path().join(name)).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_fresh_start_uses_seed_and_saves_on_quit() {
    let home = TempDir::new().unwrap();

    tasks_cmd(&home)
        .write_stdin("add Buy milk\nlist\nquit\nadd ignored\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Welcome to Ranim Harmouch's application!\n--------------------\n",
        ))
        .stdout(predicate::str::contains(
            "Received command: add, with arguments: Buy milk\nTask added: Buy milk\n",
        ))
        .stdout(predicate::str::contains("1. Do projects\n"))
        .stdout(predicate::str::contains("5. Buy milk\n"))
        .stdout(predicate::str::ends_with("Quitting now, goodbye!\n"))
        .stdout(predicate::str::contains("ignored").not());

    let json = saved(&home, "database.json");
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[1]["task"], "watch sunset");
    assert_eq!(items[1]["done"], true);
    assert_eq!(items[4]["task"], "Buy milk");
    assert_eq!(items[4]["done"], false);
}

#[test]
fn test_existing_file_is_reloaded() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("work.json"),
        r#"[{"task": "A", "done": false}, {"task": "B", "done": false}]"#,
    )
    .unwrap();

    tasks_cmd(&home)
        .arg("work.json")
        .write_stdin("edit 1 Z\ntoggle 2\nremove 5\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: invalid task number"));

    let json = saved(&home, "work.json");
    assert_eq!(
        json,
        serde_json::json!([
            {"task": "Z", "done": false},
            {"task": "B", "done": true}
        ])
    );
}

#[test]
fn test_absolute_database_path_ignores_home() {
    let home = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let db = elsewhere.path().join("tasks.json");

    tasks_cmd(&home)
        .arg(db.as_os_str())
        .write_stdin("remove\nremove\nremove\nremove\nremove\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to remove"))
        .stdout(predicate::str::contains("no tasks"));

    assert_eq!(fs::read_to_string(&db).unwrap(), "[]");
    assert!(!home.path().join("database.json").exists());
}

#[test]
fn test_unknown_command_keeps_running() {
    let home = TempDir::new().unwrap();

    tasks_cmd(&home)
        .write_stdin("foo bar\n  list  \nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: \"foo bar\""))
        .stdout(predicate::str::contains(
            "Received command: list, with arguments: \n1. Do projects\n",
        ));
}

#[test]
fn test_closed_input_still_saves() {
    let home = TempDir::new().unwrap();

    tasks_cmd(&home)
        .write_stdin("add Call mom")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quitting now").not());

    let json = saved(&home, "database.json");
    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[test]
fn test_corrupt_file_starts_empty() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("database.json"), "{ not json").unwrap();

    tasks_cmd(&home)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no tasks"));

    let backup = fs::read_to_string(home.path().join("database.json.bak")).unwrap();
    assert_eq!(backup, "{ not json");
    assert_eq!(saved(&home, "database.json"), serde_json::json!([]));
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let home = TempDir::new().unwrap();

    tasks_cmd(&home)
        .write_stdin(b"add caf\xe9\nadd B\nquit\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Quitting now, goodbye!\n"));

    let json = saved(&home, "database.json");
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[4]["task"], "caf\u{FFFD}");
    assert_eq!(items[5]["task"], "B");
}

#[test]
fn test_config_file_sets_owner_and_markers() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{ "owner": "Sam", "show_status": true }"#,
    )
    .unwrap();

    tasks_cmd(&home)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to Sam's application!\n"))
        .stdout(predicate::str::contains("2. [✓] watch sunset\n"))
        .stdout(predicate::str::contains("1. [ ] Do projects\n"));
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();

    tasks_cmd(&home)
        .write_stdin("help\nhello Sam\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("hello Sam!\n"));
}
