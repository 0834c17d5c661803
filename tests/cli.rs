//! End-to-end CLI tests against a stub dmidecode binary

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn write_stub(dir: &Path) {
    let path = dir.join("dmidecode");
    fs::write(&path, "#!/bin/sh\necho \"stub-$2\"\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn dmiq(search_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dmiq").unwrap();
    cmd.arg("--search-path").arg(search_dir);
    cmd
}

#[test]
fn json_output_contains_all_keywords() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path());

    dmiq(dir.path())
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bios-vendor\": \"stub-bios-vendor\""))
        .stdout(predicate::str::contains(
            "\"processor-frequency\": \"stub-processor-frequency\"",
        ));
}

#[test]
fn xml_output_has_category_elements() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path());

    dmiq(dir.path())
        .arg("xml")
        .assert()
        .success()
        .stdout(predicate::str::contains("<dmi>"))
        .stdout(predicate::str::contains("vendor=\"stub-bios-vendor\""))
        .stdout(predicate::str::contains("</dmi>"));
}

#[test]
fn sql_insert_subset() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path());

    dmiq(dir.path())
        .args([
            "sql",
            "--table",
            "hosts",
            "--id",
            "42",
            "--mode",
            "INSERT",
            "--keys",
            "bios-vendor,system-uuid",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "INSERT into hosts ('id', 'bios-vendor', 'system-uuid') \
             VALUES ('42', 'stub-bios-vendor', 'stub-system-uuid')",
        ));
}

#[test]
fn sql_rejects_bad_mode() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path());

    dmiq(dir.path())
        .args(["sql", "--table", "hosts", "--id", "42", "--mode", "upsert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid SQL mode"));
}

#[test]
fn sql_rejects_unknown_keyword() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path());

    dmiq(dir.path())
        .args([
            "sql",
            "--table",
            "hosts",
            "--id",
            "42",
            "--keys",
            "bios-vendor,bogus-field",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown keyword: bogus-field"));
}

#[test]
fn no_output_suppresses_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path());

    dmiq(dir.path())
        .args(["--no-output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn output_flag_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    write_stub(dir.path());
    let out = dir.path().join("record.json");

    dmiq(dir.path())
        .arg("--output")
        .arg(&out)
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"system-uuid\": \"stub-system-uuid\""));
}

#[test]
fn missing_tool_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    dmiq(dir.path())
        .arg("json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No dmidecode binary found"));
}
