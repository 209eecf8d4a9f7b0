//! Integration tests for the hr binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"chars:
  cha1:
    strength: 4
    hacking: 5
    exploit: 5
    edge: 3
recipes:
  hack:
    type: simple
    attrs: [hacking, exploit]
  bighack:
    type: simple
    attrs: [hacking, exploit]
    mods: 3
  longhack:
    type: extended
    attrs: [hacking, exploit]
"#;

/// Temp directory holding a config file.
fn test_config(extra: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hitroll.yml");
    fs::write(&path, format!("{CONFIG}{extra}")).unwrap();
    (dir, path)
}

fn hr() -> Command {
    Command::cargo_bin("hr").unwrap()
}

fn roll(config: &Path) -> Command {
    let mut cmd = hr();
    cmd.arg("--config").arg(config).arg("--seed").arg("7").arg("roll");
    cmd
}

// ---------------------------------------------------------------------------
// simple tests
// ---------------------------------------------------------------------------

#[test]
fn simple_roll_uses_attribute() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.strength", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Character: cha1"))
        .stdout(predicate::str::contains("DICE ROLLS (4):"));
}

#[test]
fn recipe_sums_attributes() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.hack", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (10):"));
}

#[test]
fn recipe_mods_are_added() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.bighack", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (13):"));
}

#[test]
fn positive_and_negative_mods() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.strength", "2", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (6):"));
    roll(&config)
        .args(["cha1.strength", "-2", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (2):"))
        .stdout(predicate::str::contains("Total modifiers: -2"));
}

#[test]
fn edge_adds_rating() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.strength", "-e", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (7):"))
        .stdout(predicate::str::contains("edge"));
}

#[test]
fn default_character() {
    let (_dir, config) = test_config("default_char: cha1\n");
    roll(&config)
        .args(["hack", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (10):"));
}

#[test]
fn verdict_is_printed() {
    let (_dir, config) = test_config("");
    roll(&config)
        .arg("cha1.hack")
        .assert()
        .success()
        .stdout(predicate::str::contains("NET HITS:").or(predicate::str::contains("FAIL!")));
}

#[test]
fn same_seed_same_roll() {
    let (_dir, config) = test_config("");
    let first = roll(&config).args(["cha1.hack", "-v"]).output().unwrap();
    let second = roll(&config).args(["cha1.hack", "-v"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn unknown_character_performs_no_test() {
    let (_dir, config) = test_config("");
    roll(&config)
        .arg("nobody.strength")
        .assert()
        .success()
        .stdout(predicate::str::contains("no test performed"))
        .stdout(predicate::str::contains("NET HITS").not());
}

#[test]
fn unknown_attribute_fails() {
    let (_dir, config) = test_config("");
    roll(&config)
        .arg("cha1.charisma")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no attribute 'charisma'"));
}

#[test]
fn overflowing_modifier_fails_cleanly() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.bighack", "2147483647"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dice pool out of range"));
}

#[test]
fn bare_recipe_without_default_fails() {
    let (_dir, config) = test_config("");
    roll(&config)
        .arg("hack")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed test target"));
}

// ---------------------------------------------------------------------------
// opposed tests
// ---------------------------------------------------------------------------

#[test]
fn opposed_rolls_both_pools() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.strength", "-2", "-o", "5", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (2):"))
        .stdout(predicate::str::contains("OPPOSED ROLLS (5):"))
        .stdout(predicate::str::contains("OPPOSED NET HITS:"));
}

#[test]
fn negative_opposition_fails() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.strength", "--opposed", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pool size: -1"));
}

// ---------------------------------------------------------------------------
// extended tests
// ---------------------------------------------------------------------------

#[test]
fn extended_runs_until_single_die() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.strength", "-1", "-x"])
        .write_stdin("\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1# EXTENDED ROLL (3)"))
        .stdout(predicate::str::contains("2# EXTENDED ROLL (2)"))
        .stdout(predicate::str::contains("3# EXTENDED ROLL (1)"))
        .stdout(predicate::str::contains("4# EXTENDED ROLL").not())
        .stdout(predicate::str::contains("TOTAL NET HITS:"));
}

#[test]
fn extended_recipe_with_round_mods_and_edge() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.longhack", "-1"])
        .write_stdin("2 e\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1# EXTENDED ROLL (9)"))
        // 10 - 1 + 2 - 1 + 3 edge
        .stdout(predicate::str::contains("2# EXTENDED ROLL (13)"))
        .stdout(predicate::str::contains("3# EXTENDED ROLL").not());
}

#[test]
fn extended_overflowing_round_modifier_fails_cleanly() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.hack", "-x"])
        .write_stdin("2147483647 1\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("1# EXTENDED ROLL (10)"))
        .stderr(predicate::str::contains("dice pool out of range"));
}

#[test]
fn extended_stops_on_no() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.hack", "-x"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1# EXTENDED ROLL (10)"))
        .stdout(predicate::str::contains("2# EXTENDED ROLL").not());
}

#[test]
fn extended_help_reprompts() {
    let (_dir, config) = test_config("");
    roll(&config)
        .args(["cha1.hack", "-x"])
        .write_stdin("help\n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("e/edge  = use edge in this roll"))
        .stdout(predicate::str::contains("2# EXTENDED ROLL (9)"));
}

// ---------------------------------------------------------------------------
// notation & config
// ---------------------------------------------------------------------------

#[test]
fn notation_rolls_raw_spec() {
    hr().args(["--seed", "3", "notation", "4d6>=5", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SPEC: 4d6>4"))
        .stdout(predicate::str::contains("DICE ROLLS (4):"));
}

#[test]
fn notation_rejects_malformed_spec() {
    hr().args(["notation", "4d8>5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed roll spec"));
}

#[test]
fn default_config_file_in_current_dir() {
    let (dir, _config) = test_config("");
    hr().current_dir(dir.path())
        .args(["--seed", "1", "roll", "cha1.strength", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (4):"));
}

#[test]
fn no_config_means_no_characters() {
    let dir = TempDir::new().unwrap();
    hr().current_dir(dir.path())
        .args(["roll", "cha1.strength"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no test performed"));
}

#[test]
fn missing_explicit_config_fails() {
    hr().args(["--config", "/definitely/not/here.yml", "roll", "cha1.strength"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn custom_patterns_from_config() {
    let (_dir, config) = test_config("roll: d6>5\n");
    roll(&config)
        .args(["cha1.strength", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICE ROLLS (4):"));
}
