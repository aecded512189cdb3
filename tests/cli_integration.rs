#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn care_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("eldercare").unwrap();
    cmd.current_dir(dir)
        .env("ELDERCARE_CONFIG_DIR", dir.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &Path, name: &str, age: &str, need: &str) {
    care_cmd(dir)
        .args(["add", "--name", name, "--age", age, "--need", need])
        .args(["--address", "12 Oak St", "--contact", "555-0100"])
        .assert()
        .success();
}

#[test]
fn test_add_list_delete_across_runs() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    care_cmd(dir)
        .args(["add", "--name", "Maria Lopez", "--age", "72"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added with ID: 1000"))
        .stdout(predicate::str::contains("Data saved to"));

    add(dir, "John Doe", "68", "medication reminders");

    care_cmd(dir)
        .args(["delete", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record with ID 1000 deleted."));

    care_cmd(dir)
        .args(["add", "--name", "Ana Ruiz", "--age", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added with ID: 1002"));

    care_cmd(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Ana Ruiz"))
        .stdout(predicate::str::contains("Maria Lopez").not());

    let saved = fs::read_to_string(dir.join("elderly_data.txt")).unwrap();
    let mut lines = saved.lines();
    assert_eq!(lines.next(), Some("1003"));
    assert_eq!(
        lines.next(),
        Some("1001|John Doe|68|12 Oak St|medication reminders|555-0100")
    );
    assert_eq!(lines.next(), Some("1002|Ana Ruiz|80|||"));
}

#[test]
fn test_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice Smith", "81", "meals");
    add(temp.path(), "Bob Jones", "77", "rides");

    care_cmd(temp.path())
        .args(["search", "ALICE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Smith"))
        .stdout(predicate::str::contains("Bob Jones").not());

    care_cmd(temp.path())
        .args(["search", "carol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records match 'carol'."));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice Smith", "81", "meals");

    care_cmd(temp.path())
        .args(["edit", "1000", "--contact", "555-0199"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record updated."));

    care_cmd(temp.path())
        .args(["show", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Alice Smith"))
        .stdout(predicate::str::contains("Need/Remarks: meals"))
        .stdout(predicate::str::contains("Contact: 555-0199"));
}

#[test]
fn test_missing_record_fails() {
    let temp = TempDir::new().unwrap();

    care_cmd(temp.path())
        .args(["show", "4242"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record with ID 4242 found."));

    care_cmd(temp.path())
        .args(["delete", "4242"])
        .assert()
        .failure();

    assert!(!temp.path().join("elderly_data.txt").exists());
}

#[test]
fn test_delimiter_in_field_is_rejected() {
    let temp = TempDir::new().unwrap();

    care_cmd(temp.path())
        .args(["add", "--name", "Ann|Lee", "--age", "70"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not contain '|'"));
}

#[test]
fn test_malformed_lines_are_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("elderly_data.txt"),
        "1002\n1000|Maria Lopez|72|12 Oak St|meals|555\n1001|Broken|68|4 Elm Rd\n",
    )
    .unwrap();

    care_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maria Lopez"))
        .stdout(predicate::str::contains("Broken").not())
        .stderr(predicate::str::contains("Skipped 1 malformed line(s)."));
}

#[test]
fn test_file_flag_overrides_default_location() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("records").join("care.txt");

    care_cmd(temp.path())
        .args(["--file", data.to_str().unwrap()])
        .args(["add", "--name", "Ana Ruiz", "--age", "80"])
        .assert()
        .success();

    assert!(data.exists());
    assert!(!temp.path().join("elderly_data.txt").exists());
}

#[test]
fn test_config_set_and_show() {
    let temp = TempDir::new().unwrap();

    care_cmd(temp.path())
        .args(["config", "save-on-exit", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("save-on-exit set to always"));

    care_cmd(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("save-on-exit = always"))
        .stdout(predicate::str::contains("load-on-start = true"));

    care_cmd(temp.path())
        .args(["config", "save-on-exit", "sometimes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("save-on-exit must be"));
}

#[test]
fn test_shell_session_saves_on_request() {
    let temp = TempDir::new().unwrap();

    care_cmd(temp.path())
        .write_stdin("1\nMaria Lopez\n72\n12 Oak St\ngrocery delivery\n555-0100\nx\n9\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved data file found"))
        .stdout(predicate::str::contains("Record added with ID: 1000"))
        .stdout(predicate::str::contains("Invalid option. Please choose 1..9"))
        .stdout(predicate::str::contains("Goodbye!"));

    let saved = fs::read_to_string(temp.path().join("elderly_data.txt")).unwrap();
    assert_eq!(
        saved,
        "1001\n1000|Maria Lopez|72|12 Oak St|grocery delivery|555-0100\n"
    );
}

#[test]
fn test_shell_reloads_saved_records() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "John Doe", "68", "medication reminders");

    care_cmd(temp.path())
        .arg("shell")
        .write_stdin("2\n9\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data loaded from"))
        .stdout(predicate::str::contains("Name: John Doe"));
}

#[test]
fn test_shell_exits_on_end_of_input() {
    let temp = TempDir::new().unwrap();

    care_cmd(temp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input error. Exiting."));

    assert!(!temp.path().join("elderly_data.txt").exists());
}
