//! End-to-end tests for the `confuscan` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn confuscan() -> Command {
    Command::cargo_bin("confuscan").unwrap()
}

#[test]
fn clean_file_exits_zero() {
    let dir = TempDir::new().unwrap();
    let clean = dir.path().join("clean.js");
    fs::write(&clean, "const a = 1;\n").unwrap();

    confuscan()
        .arg(&clean)
        .assert()
        .success()
        .stdout(predicate::str::contains("No security issues detected"));
}

#[test]
fn flagged_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.js");
    fs::write(&bad, "const a = \"user\u{202E} // bidi\"\n").unwrap();

    confuscan()
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Security Issues Found:"))
        .stderr(predicate::str::contains("bad.js"));
}

#[test]
fn verbose_mode_shows_located_findings() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.js");
    fs::write(&bad, "line1\nline2\u{200B}test\n").unwrap();

    confuscan()
        .arg("--verbose")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2:6"))
        .stderr(predicate::str::contains("U+200B"))
        .stderr(predicate::str::contains("ZERO WIDTH SPACE"))
        .stderr(predicate::str::contains("SCAN SUMMARY"));
}

#[test]
fn json_mode_emits_wire_format() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.js");
    fs::write(&bad, "x\u{00A0}y\n").unwrap();

    let output = confuscan().arg("--json").arg(&bad).assert().failure();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["file"], bad.display().to_string());
    assert_eq!(parsed[0]["findings"][0]["codePoint"], "U+00A0");
    assert_eq!(parsed[0]["findings"][0]["category"], "Confusable");
}

#[test]
fn json_mode_reports_success_object_when_clean() {
    let dir = TempDir::new().unwrap();
    let clean = dir.path().join("clean.js");
    fs::write(&clean, "nothing here\n").unwrap();

    let output = confuscan().arg("--json").arg(&clean).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["success"], true);
}

#[test]
fn glob_pattern_expands_against_cwd() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/bad.js"), "a\u{200B}b\n").unwrap();
    fs::write(dir.path().join("src/clean.js"), "ok\n").unwrap();

    confuscan()
        .current_dir(dir.path())
        .arg("--files")
        .arg("**/*.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("src/bad.js"))
        .stderr(predicate::str::contains("clean.js").not());
}

#[test]
fn missing_paths_scan_clean() {
    confuscan()
        .arg("does-not-exist-anywhere.js")
        .assert()
        .success();
}

#[test]
fn stdin_is_scanned_when_no_paths_given() {
    confuscan()
        .write_stdin("clean input\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No case of trojan source detected"));

    confuscan()
        .write_stdin("evil\u{202E}input\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input passed to STDIN"));
}

#[test]
fn stdin_json_mode_lists_findings() {
    let output = confuscan()
        .arg("--json")
        .write_stdin("evil\u{202E}input\n")
        .assert()
        .failure();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["findings"][0]["codePoint"], "U+202E");
    assert_eq!(parsed["findings"][0]["line"], 1);
}
