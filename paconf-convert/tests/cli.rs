use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/running-config.xml")
}

#[test]
fn convert_writes_workbook_to_given_output() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("firewall.xlsx");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("paconf-convert"));
    cmd.arg(fixture())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn convert_defaults_output_next_to_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("running-config.xml");
    fs::copy(fixture(), &input).expect("copy fixture");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("paconf-convert"));
    cmd.arg(&input).assert().success();

    assert!(dir.path().join("running-config.xlsx").exists());
}

#[test]
fn missing_input_fails_with_context() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("paconf-convert"));
    cmd.arg("/nonexistent/running-config.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to convert"));
}

#[test]
fn fortigate_is_rejected() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("paconf-convert"));
    cmd.arg(fixture())
        .arg("--device")
        .arg("fortigate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FortiGate conversion is not implemented"));
}
