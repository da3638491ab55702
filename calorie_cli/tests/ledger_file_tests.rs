//! Ledger file handling tests for caltrack.
//!
//! These tests verify the ledger-only actions (show, remove) against:
//! - Missing ledger files
//! - Corrupted ledger files
//! - Ledgers written by earlier versions of the tool

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LEGACY_LEDGER: &str = r#"{
	"2019-02-11": {
		"01009": {
			"Name": "Cheese, cheddar",
			"Energy": 404,
			"Protein": 22.87,
			"Fat": 33.31,
			"Carbohydrate": 3.09,
			"Fiber": 0,
			"Qtd": 150
		},
		"09003": {
			"Name": "Apples, raw, with skin",
			"Energy": 52,
			"Protein": 0.26,
			"Fat": 0.17,
			"Carbohydrate": 13.81,
			"Fiber": 2.4,
			"Qtd": 200
		}
	}
}"#;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("caltrack"));
    cmd.env_remove("RUST_LOG").env_remove("USDA_API_KEY");
    cmd
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Empty config so the user's own config file is never read
fn empty_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, "").expect("Failed to write config");
    path
}

fn ledger_cmd(dir: &Path, ledger: &Path) -> Command {
    let mut cmd = cli();
    cmd.arg("--config")
        .arg(empty_config(dir))
        .arg("--ledger")
        .arg(ledger);
    cmd
}

#[test]
fn test_show_without_ledger_file() {
    let temp_dir = setup_test_dir();
    let ledger = temp_dir.path().join("calorietracker.json");

    ledger_cmd(temp_dir.path(), &ledger)
        .args(["--action", "show", "--day", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("There is no record for 2024-01-01"));

    assert!(!ledger.exists());
}

#[test]
fn test_remove_without_ledger_file() {
    let temp_dir = setup_test_dir();
    let ledger = temp_dir.path().join("calorietracker.json");

    ledger_cmd(temp_dir.path(), &ledger)
        .args(["--action", "remove", "--ndbno", "01009", "--day", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to remove"));

    assert!(!ledger.exists());
}

#[test]
fn test_show_legacy_ledger() {
    let temp_dir = setup_test_dir();
    let ledger = temp_dir.path().join("calorietracker.json");
    fs::write(&ledger, LEGACY_LEDGER).unwrap();

    ledger_cmd(temp_dir.path(), &ledger)
        .args(["--action", "show", "--day", "2019-02-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Apples, raw, with skin"))
        .stdout(predicate::str::contains("(350 g eaten)"))
        .stdout(predicate::str::contains("Energy: 710.0 kcal"));
}

#[test]
fn test_remove_keeps_other_foods() {
    let temp_dir = setup_test_dir();
    let ledger = temp_dir.path().join("calorietracker.json");
    fs::write(&ledger, LEGACY_LEDGER).unwrap();

    ledger_cmd(temp_dir.path(), &ledger)
        .args(["--action", "remove", "--ndbno", "01009", "--day", "2019-02-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Erased Cheese, cheddar"));

    let contents = fs::read_to_string(&ledger).unwrap();
    assert!(!contents.contains("01009"));
    assert!(contents.contains("\t\t\"09003\": {"));
}

#[test]
fn test_remove_unknown_food_leaves_file_untouched() {
    let temp_dir = setup_test_dir();
    let ledger = temp_dir.path().join("calorietracker.json");
    fs::write(&ledger, LEGACY_LEDGER).unwrap();

    ledger_cmd(temp_dir.path(), &ledger)
        .args(["--action", "remove", "--ndbno", "11111", "--day", "2019-02-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11111 is not logged on 2019-02-11"));

    assert_eq!(fs::read_to_string(&ledger).unwrap(), LEGACY_LEDGER);
}

#[test]
fn test_corrupted_ledger_is_fatal() {
    let temp_dir = setup_test_dir();
    let ledger = temp_dir.path().join("calorietracker.json");
    fs::write(&ledger, "{ invalid json }}}}").unwrap();

    ledger_cmd(temp_dir.path(), &ledger)
        .args(["--action", "remove", "--ndbno", "01009", "--day", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));

    // The damaged file is left for the user to repair
    assert_eq!(fs::read_to_string(&ledger).unwrap(), "{ invalid json }}}}");
}

#[test]
fn test_invalid_day_is_usage_error() {
    let temp_dir = setup_test_dir();
    let ledger = temp_dir.path().join("calorietracker.json");

    ledger_cmd(temp_dir.path(), &ledger)
        .args(["--action", "show", "--day", "11/02/2019"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--day"));
}
