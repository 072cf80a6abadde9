//! Integration tests for moving data in and out
//!
//! Tests the complete flow:
//! 1. Build up a pool with members, payments and a reminder
//! 2. Export it to a dated file
//! 3. Import it into a fresh home
//! 4. Reject bad import files without touching existing data

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn chitty(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("chitty"));
    cmd.env("CHITTY_HOME", home).env_remove("RUST_LOG").current_dir(home);
    cmd
}

fn json(home: &Path, args: &[&str]) -> serde_json::Value {
    let output = chitty(home).arg("--json").args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

/// Export into `dir` and return the single file written
fn export(home: &Path, dir: &Path) -> PathBuf {
    chitty(home)
        .args(["export", "--dir", dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported data to"));

    let files: Vec<PathBuf> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(files.len(), 1);
    files.into_iter().next().unwrap()
}

#[test]
fn test_export_import_round_trip() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let exports = TempDir::new().unwrap();

    let pool = json(source.path(), &["pool", "add", "Diwali Fund", "--start", "2024-01-01"])["id"]
        .as_str()
        .unwrap()
        .to_string();
    let member = json(source.path(), &["member", "add", &pool, "Lakshmi", "--phone", "9447000000"])["id"]
        .as_str()
        .unwrap()
        .to_string();
    json(source.path(), &["payment", "add", &pool, "-m", &member, "--month", "1"]);
    json(source.path(), &["reminder", "add", &pool, "--date", "2024-02-05"]);

    let file = export(source.path(), exports.path());
    let name = file.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("chitty_data_"));
    assert!(name.ends_with(".txt"));
    let text = fs::read_to_string(&file).unwrap();
    assert!(text.contains("\n  \"chitties\": ["));

    chitty(target.path())
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 chitty(s) and 1 reminder(s)"));

    let shown = json(target.path(), &["pool", "show", &pool]);
    assert_eq!(shown["pool"]["members"][0]["name"], "Lakshmi");
    assert_eq!(shown["pool"]["payments"][0]["monthIndex"], 1);
    let reminders = json(target.path(), &["reminder", "list"]);
    assert_eq!(reminders["reminders"][0]["chitty_name"], "Diwali Fund");
}

#[test]
fn test_bad_import_keeps_existing_data() {
    let home = TempDir::new().unwrap();
    json(home.path(), &["pool", "add", "Diwali Fund"]);

    let no_pools = home.path().join("no_pools.json");
    fs::write(&no_pools, r#"{"version": "1.0.0", "reminders": []}"#).unwrap();
    chitty(home.path())
        .args(["import", no_pools.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chitties"));

    let garbage = home.path().join("garbage.txt");
    fs::write(&garbage, "not json at all").unwrap();
    chitty(home.path())
        .args(["import", garbage.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));

    let list = json(home.path(), &["pool", "list"]);
    assert_eq!(list["total"], 1);
}

#[test]
fn test_import_file_from_older_export() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("chitty_data_2024-02-01.txt");
    fs::write(
        &file,
        r#"{
  "version": "1.0.0",
  "lastUpdated": "2024-02-01T09:30:00.000Z",
  "chitties": [
    {
      "id": "c1",
      "name": "Diwali Fund",
      "branch": "Thrissur",
      "totalMonths": 20,
      "installmentAmount": 5000,
      "startDate": "2024-01-01T00:00:00.000Z",
      "status": "running",
      "members": [],
      "payments": []
    }
  ]
}"#,
    )
    .unwrap();

    chitty(home.path()).args(["import", file.to_str().unwrap()]).assert().success();

    let shown = json(home.path(), &["pool", "show", "c1"]);
    assert_eq!(shown["pool"]["startDate"], "2024-01-01");
    let reminders = json(home.path(), &["reminder", "list"]);
    assert_eq!(reminders["total"], 0);
}

#[test]
fn test_login_session_lifecycle() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("credentials.txt"), "ammu@example.com:secret\n").unwrap();

    chitty(home.path())
        .args(["login", "--email", "ammu@example.com", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid email or password"));

    chitty(home.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));

    chitty(home.path())
        .args(["login", "--email", "ammu@example.com", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ammu@example.com"));

    let me = json(home.path(), &["whoami"]);
    assert_eq!(me["signed_in"], true);
    assert_eq!(me["user"]["uid"], "YW1tdUBleGFtcGxlLmNvbQ==");

    chitty(home.path()).arg("logout").assert().success();
    let me = json(home.path(), &["whoami"]);
    assert_eq!(me["signed_in"], false);
}
