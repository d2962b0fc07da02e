// The cargo_bin! macro requires build script setup that's overkill for simple tests.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

fn yieldsim() -> Command {
    Command::new(cargo_bin("yieldsim"))
}

/// Scenario with one modifier pointing at an adjacency that does not exist.
fn broken_scenario() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
  "state": {{
    "players": {{ "0": {{ "id": 0, "is_major": true, "cities": [1] }} }},
    "cities": {{ "1": {{ "id": 1, "owner": 0 }} }}
  }},
  "modifiers": [
    {{
      "Id": "BROKEN_ADJACENCY",
      "EffectType": "EFFECT_CITY_ACTIVATE_CONSTRUCTIBLE_ADJACENCY",
      "Arguments": {{ "ConstructibleAdjacency": {{ "Value": "NoSuchAdjacency" }} }}
    }}
  ],
  "evaluate": [
    {{ "modifier": "BROKEN_ADJACENCY", "subjects": [{{ "kind": "city", "id": 1 }}] }}
  ]
}}"#
    )
    .expect("write scenario");
    file
}

#[test]
fn test_help_flag() {
    yieldsim()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--scenario"));
}

#[test]
fn test_demo_table_output() {
    yieldsim()
        .arg("--scenario")
        .arg(demo("assembly_line.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("GOLD_PER_CITY"))
        .stdout(predicate::str::contains("TOTAL"))
        .stdout(predicate::str::contains("4.00"))
        .stdout(predicate::str::contains("4.50"));
}

#[test]
fn test_demo_json_output() {
    let output = yieldsim()
        .arg("--scenario")
        .arg(demo("assembly_line.json"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("failed to execute");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let evaluations = parsed.as_array().expect("array of evaluations");
    assert_eq!(evaluations.len(), 3);

    assert_eq!(evaluations[0]["modifier"], "GOLD_PER_CITY");
    assert_eq!(evaluations[0]["yields"]["YIELD_GOLD"]["amount"], 4.0);
    // Two cities and one town, 1.5 science each.
    assert_eq!(evaluations[1]["yields"]["YIELD_SCIENCE"]["amount"], 4.5);
    // Movement is not a yield effect.
    assert!(evaluations[2]["yields"].as_object().unwrap().is_empty());
}

#[test]
fn test_lenient_run_reports_diagnostics() {
    let scenario = broken_scenario();
    yieldsim()
        .arg("--scenario")
        .arg(scenario.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(no change)"))
        .stderr(predicate::str::contains("Resolution diagnostics"));
}

#[test]
fn test_strict_run_fails() {
    let scenario = broken_scenario();
    yieldsim()
        .arg("--scenario")
        .arg(scenario.path())
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoSuchAdjacency"));
}

#[test]
fn test_missing_scenario_file() {
    yieldsim()
        .arg("--scenario")
        .arg("/nonexistent/scenario.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read scenario"));
}
