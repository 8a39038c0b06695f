//! End-to-end tests for the mailsift binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn mailsift() -> Command {
    Command::cargo_bin("mailsift").unwrap()
}

const EMAIL: &str = "\
Subject: Order shipped

Invoice #12345
Total: $99.99
Visit https://example.com/track
";

const TEMPLATE: &str = r#"{
    "name": "Orders",
    "fields": [
        {
            "name": "invoice",
            "type": "text",
            "required": true,
            "extractionRules": {"regex": "Invoice #(\\d+)", "group": 1}
        },
        {
            "name": "total",
            "type": "currency",
            "extractionRules": {"after": "Total: ", "maxLength": 6}
        }
    ]
}"#;

#[test]
fn parse_generic_outputs_json() {
    let dir = tempfile::tempdir().unwrap();
    let email = write_file(&dir, "email.txt", EMAIL);

    mailsift()
        .arg("parse")
        .arg(&email)
        .assert()
        .success()
        .stdout(predicate::str::contains("keyValuePairs"))
        .stdout(predicate::str::contains("https://example.com/track"));
}

#[test]
fn parse_with_template_extracts_fields() {
    let dir = tempfile::tempdir().unwrap();
    let email = write_file(&dir, "email.txt", EMAIL);
    let template = write_file(&dir, "orders.json", TEMPLATE);

    mailsift()
        .arg("parse")
        .arg(&email)
        .arg("--template")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""invoice":"12345""#))
        .stdout(predicate::str::contains(r#""amount":99.99"#));
}

#[test]
fn parse_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let email = write_file(&dir, "email.txt", EMAIL);
    let output = dir.path().join("result.json");

    mailsift()
        .arg("parse")
        .arg(&email)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("emailAddresses"));
}

#[test]
fn parse_missing_input_fails() {
    mailsift()
        .arg("parse")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn template_validate_accepts_good_template() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_file(&dir, "orders.json", TEMPLATE);

    mailsift()
        .arg("template")
        .arg("validate")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn template_validate_reports_issues() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_file(
        &dir,
        "broken.json",
        r#"{"fields": [{"name": "x", "type": "text", "extractionRules": {"regex": "[unclosed"}}]}"#,
    );

    mailsift()
        .arg("template")
        .arg("validate")
        .arg(&template)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn batch_processes_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir, "a.txt", "Ref: 1\n");
    write_file(&dir, "b.txt", "Ref: 2\n");
    let out = dir.path().join("out");

    mailsift()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 files"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());
}
