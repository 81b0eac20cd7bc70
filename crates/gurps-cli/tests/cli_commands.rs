//! Integration tests for the `gurps` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gurps() -> Command {
    Command::cargo_bin("gurps").unwrap()
}

// -- roll --

#[test]
fn roll_prints_value_in_range() {
    let output = gurps()
        .args(["roll", "3d6", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: i32 = String::from_utf8(output).unwrap().trim().parse().unwrap();
    assert!((3..=18).contains(&value));
}

#[test]
fn roll_is_repeatable_with_seed() {
    let first = gurps()
        .args(["roll", "2d6+1", "--times", "5", "--seed", "42"])
        .output()
        .unwrap();
    let second = gurps()
        .args(["roll", "2d6+1", "--times", "5", "--seed", "42"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_many_prints_total() {
    gurps()
        .args(["roll", "1d6", "-t", "3", "-s", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d6"))
        .stdout(predicate::str::contains("total:"));
}

#[test]
fn roll_rejects_bad_expression() {
    gurps()
        .args(["roll", "3x6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("invalid dice format"));
}

#[test]
fn roll_rejects_zero_dice() {
    gurps()
        .args(["roll", "0d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn roll_rejects_out_of_range_expression() {
    gurps()
        .args(["roll", "4294967295d4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

// -- generate --

#[test]
fn generate_prints_sheet() {
    gurps()
        .args(["generate", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" ===> "))
        .stdout(predicate::str::contains("Basic Speed:"))
        .stdout(predicate::str::contains("Advantages // Disadvantages:"))
        .stdout(predicate::str::contains("Skills:"));
}

#[test]
fn generate_is_repeatable_with_seed() {
    let run = || {
        gurps()
            .args(["generate", "-n", "3", "--seed", "99"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn generate_several_separates_entries() {
    gurps()
        .args(["generate", "-n", "3", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("================================").count(2));
}

#[test]
fn generate_json() {
    let output = gurps()
        .args(["generate", "-n", "2", "--seed", "8", "--json", "--max-skills", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let characters = value.as_array().unwrap();
    assert_eq!(characters.len(), 2);
    for character in characters {
        assert!(character["name"].is_string());
        assert!(character["skills"].as_array().unwrap().len() <= 1);
    }
}

#[test]
fn generate_too_many_fails() {
    gurps()
        .args(["generate", "-n", "18", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("names are already taken"));
}

#[test]
fn generate_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"max_features": 0, "max_skills": 0}"#).unwrap();

    gurps()
        .args(["generate", "--seed", "4", "--json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""features": []"#))
        .stdout(predicate::str::contains(r#""skills": []"#));
}

#[test]
fn generate_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "not json").unwrap();

    gurps()
        .args(["generate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn generate_rejects_overflowing_attribute_bonus() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"attribute_bonus": 2147483647}"#).unwrap();

    gurps()
        .args(["generate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid attribute bonus"));
}

// -- output / show --

#[test]
fn save_then_show() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("session.txt");

    gurps()
        .args(["generate", "-n", "3", "--seed", "12", "-o"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let content = fs::read_to_string(&file).unwrap();
    assert_eq!(content.matches(" ===> ").count(), 3);

    gurps()
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("3 characters"));

    gurps()
        .arg("show")
        .arg(&file)
        .args(["--index", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skills:"));
}

#[test]
fn show_index_out_of_range() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("session.txt");
    gurps()
        .args(["generate", "--seed", "1", "-o"])
        .arg(&file)
        .assert()
        .success();

    gurps()
        .arg("show")
        .arg(&file)
        .args(["-i", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no character at position 5"));
}

#[test]
fn show_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.txt");
    fs::write(&file, "no separator here").unwrap();

    gurps()
        .arg("show")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid session file"));
}

#[test]
fn show_missing_file() {
    gurps()
        .args(["show", "/nonexistent/session.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}
