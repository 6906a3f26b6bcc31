// End-to-end tests: run the binary the way the launcher does, one selection per invocation

use assert_cmd::Command;
use predicates::prelude::*;
use rofi_todo::config::Config;
use rofi_todo::db::DbConnection;
use rofi_todo::repo::{ArchiveRepo, TaskRepo};
use std::fs;
use tempfile::TempDir;

/// External programs replaced by no-ops so tests never touch the desktop
const QUIET_RC: &str = "notify.command=true\nalarm.command=true\nclipboard.command=true\n";

/// Helper to create a temporary data folder with an rc file
fn setup_test_env(rc: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("rc"), rc).unwrap();
    temp_dir
}

/// Helper to create a new command pointed at the test data folder
fn new_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rofi-todo").unwrap();
    cmd.env("ROFI_TODO_DATA_FOLDER", temp_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run one selection, expect success and return stdout
fn select(temp_dir: &TempDir, selection: &str) -> String {
    let output = new_cmd(temp_dir)
        .arg(selection)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_no_selection_prints_empty_list() {
    let temp_dir = setup_test_env(QUIET_RC);

    new_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp_dir.path().join("rofi-todo.db").exists());
}

#[test]
fn test_add_and_list() {
    let temp_dir = setup_test_env(QUIET_RC);

    let stdout = select(&temp_dir, "+p:2:p Buy milk");

    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("[1] [p:2] ["));
    assert!(stdout.trim_end().ends_with("✘ Buy milk"));
}

#[test]
fn test_list_order_across_invocations() {
    let temp_dir = setup_test_env(QUIET_RC);

    select(&temp_dir, "+p:1:p Low");
    select(&temp_dir, "+p:3:p High");
    select(&temp_dir, "+p:5:p Finished");
    let stdout = select(&temp_dir, "!3");

    let titles: Vec<&str> = stdout
        .lines()
        .map(|line| line.rsplit_once(' ').unwrap().1)
        .collect();
    assert_eq!(titles, vec!["High", "Low", "Finished"]);
    assert!(stdout.lines().last().unwrap().contains("✔"));
}

#[test]
fn test_failed_command_still_lists() {
    let temp_dir = setup_test_env(QUIET_RC);
    select(&temp_dir, "+Buy milk");

    for bad in ["+p:1 Broken", "!abc", "-everything", ">1", "no id here", "+"] {
        new_cmd(&temp_dir)
            .arg(bad)
            .assert()
            .success()
            .stdout(predicate::str::contains("Buy milk"));
    }

    let stdout = select(&temp_dir, "");
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_alarm_program_failure_aborts_create() {
    let temp_dir = setup_test_env("notify.command=true\nalarm.command=false\n");

    new_cmd(&temp_dir)
        .arg("+a:2030-01-01 08:00,Wake me:a Alarm task")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_alarm_is_stored() {
    let temp_dir = setup_test_env(QUIET_RC);

    select(&temp_dir, "+a:2030-01-01 08:00,Wake me:a p:1:p Alarm task");

    let conn = DbConnection::connect(&Config::with_data_dir(temp_dir.path())).unwrap();
    let task = TaskRepo::get_by_id(&conn, 1).unwrap().unwrap();
    assert_eq!(task.title, "Alarm task");
    assert_eq!(task.priority, 1);
    assert_eq!(task.alarm_text.as_deref(), Some("Wake me"));
    assert!(task.alarm_ts.is_some());
}

#[test]
fn test_alarm_times_around_dst_transitions() {
    let temp_dir = setup_test_env(QUIET_RC);

    for selection in [
        // Clocks go back: first occurrence, 01:30 EDT
        "+a:2024-11-03 01:30:a Fall back",
        // Clocks go forward: 02:30 does not exist, moves to 03:30 EDT
        "+a:2024-03-10 02:30:a Spring forward",
    ] {
        new_cmd(&temp_dir)
            .env("TZ", "America/New_York")
            .arg(selection)
            .assert()
            .success();
    }

    let conn = DbConnection::connect(&Config::with_data_dir(temp_dir.path())).unwrap();
    let fall_back = TaskRepo::get_by_id(&conn, 1).unwrap().unwrap();
    assert_eq!(fall_back.title, "Fall back");
    assert_eq!(fall_back.alarm_ts, Some(1730611800));
    let spring_forward = TaskRepo::get_by_id(&conn, 2).unwrap().unwrap();
    assert_eq!(spring_forward.alarm_ts, Some(1710055800));
}

#[test]
fn test_edit_and_priority() {
    let temp_dir = setup_test_env(QUIET_RC);
    select(&temp_dir, "+Buy milk");

    let stdout = select(&temp_dir, ">1 p:4:p Buy oat milk");
    assert!(stdout.contains("[1] [p:4]"));
    assert!(stdout.contains("Buy oat milk"));

    let stdout = select(&temp_dir, "p1 7");
    assert!(stdout.contains("[1] [p:7]"));
    assert!(stdout.contains("Buy oat milk"));
}

#[test]
fn test_undone() {
    let temp_dir = setup_test_env(QUIET_RC);
    select(&temp_dir, "+Buy milk");
    assert!(select(&temp_dir, "!1").contains("✔ Buy milk"));
    assert!(select(&temp_dir, "?1").contains("✘ Buy milk"));
}

#[test]
fn test_clear_moves_tasks_to_archive() {
    let temp_dir = setup_test_env(QUIET_RC);
    select(&temp_dir, "+One");
    select(&temp_dir, "+Two");
    select(&temp_dir, "+Three");
    select(&temp_dir, "!2");

    let stdout = select(&temp_dir, "-done");
    assert_eq!(stdout.lines().count(), 2);
    assert!(!stdout.contains("Two"));

    let stdout = select(&temp_dir, "-1");
    assert_eq!(stdout.lines().count(), 1);

    let stdout = select(&temp_dir, "-all");
    assert!(stdout.is_empty());

    let conn = DbConnection::connect(&Config::with_data_dir(temp_dir.path())).unwrap();
    let archived = ArchiveRepo::list(&conn).unwrap();
    let mut ids: Vec<i64> = archived.iter().map(|a| a.task.id.unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(archived.iter().all(|a| a.deleted_ts > 0));
}

#[test]
fn test_selecting_a_line_copies_it() {
    let temp_dir = setup_test_env(QUIET_RC);
    let stdout = select(&temp_dir, "+Buy milk");
    let line = stdout.lines().next().unwrap().to_string();

    // Copy mode leaves the task open
    let stdout = select(&temp_dir, &line);
    assert!(stdout.contains("✘ Buy milk"));
}

#[test]
fn test_selecting_a_line_in_done_mode() {
    let temp_dir = setup_test_env(&format!("{}selection=done\n", QUIET_RC));
    let stdout = select(&temp_dir, "+Buy milk");
    let line = stdout.lines().next().unwrap().to_string();

    let stdout = select(&temp_dir, &line);
    assert!(stdout.contains("✔ Buy milk"));
}

#[test]
fn test_json_output() {
    let temp_dir = setup_test_env(&format!("{}output=json\n", QUIET_RC));

    let stdout = select(&temp_dir, "+p:2:p Buy milk");

    let value: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["title"], "Buy milk");
    assert_eq!(value["priority"], 2);
    assert_eq!(value["done"], false);
}

#[test]
fn test_unusable_data_folder_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let not_a_dir = temp_dir.path().join("file");
    fs::write(&not_a_dir, "").unwrap();

    Command::cargo_bin("rofi-todo")
        .unwrap()
        .env("ROFI_TODO_DATA_FOLDER", not_a_dir.join("data"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to create directory"));
}

#[test]
fn test_invalid_rc_exits_with_error() {
    let temp_dir = setup_test_env("notify.command=true\nselection=paste\n");

    new_cmd(&temp_dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}
