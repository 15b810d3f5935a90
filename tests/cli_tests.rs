//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn envdiff() -> Command {
    Command::cargo_bin("envdiff").unwrap()
}

fn write(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

#[test]
fn test_diff_reports_added_removed_changed() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.env");
    let b = dir.path().join("b.env");
    write(&a, "SHARED=same\nOLD_KEY=x\nPORT=3000\n");
    write(&b, "SHARED=same\nNEW_KEY=y\nPORT=8080\n");

    envdiff()
        .args(["diff", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ NEW_KEY"))
        .stdout(predicate::str::contains("- OLD_KEY"))
        .stdout(predicate::str::contains("~ PORT: 3000 → 8080"))
        .stdout(predicate::str::contains("Unchanged: 1 variables"));
}

#[test]
fn test_diff_json_format() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.env");
    let b = dir.path().join("b.env");
    write(&a, "KEY=1\n");
    write(&b, "KEY=1\nEXTRA=2\n");

    let output = envdiff()
        .args([
            "diff",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["added"][0], "EXTRA");
    assert_eq!(parsed["unchanged"][0], "KEY");
}

#[test]
fn test_diff_only_changed_filter() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.env");
    let b = dir.path().join("b.env");
    write(&a, "GONE=1\nPORT=1\n");
    write(&b, "PORT=2\nNEW=1\n");

    envdiff()
        .args([
            "diff",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--only-changed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("~ PORT"))
        .stdout(predicate::str::contains("NEW").not())
        .stdout(predicate::str::contains("GONE").not());
}

#[test]
fn test_diff_no_values_masks_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.env");
    let b = dir.path().join("b.env");
    write(&a, "TOKEN=hunter2\n");
    write(&b, "TOKEN=hunter3\n");

    envdiff()
        .args([
            "diff",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--no-values",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("*** → ***"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_diff_compose_source_handle() {
    let dir = tempfile::tempdir().unwrap();
    let compose = dir.path().join("docker-compose.yml");
    let env = dir.path().join("b.env");
    write(
        &compose,
        "services:\n  web:\n    environment:\n      - PORT=3000\n",
    );
    write(&env, "OTHER=1\n");

    let handle = format!("compose:{}", compose.display());
    envdiff()
        .args(["diff", handle.as_str(), env.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- web__PORT"))
        .stdout(predicate::str::contains("+ OTHER"));
}

#[test]
fn test_diff_missing_dotenv_is_fatal() {
    envdiff()
        .args(["diff", "/nonexistent/a.env", "/nonexistent/b.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_check_passes_when_all_present() {
    let dir = tempfile::tempdir().unwrap();
    let env = dir.path().join(".env");
    let baseline = dir.path().join(".env.example");
    write(&env, "DB_HOST=localhost\nAPI_KEY=abc\n");
    write(&baseline, "DB_HOST=\nAPI_KEY=\n");

    envdiff()
        .args([
            "check",
            env.to_str().unwrap(),
            "--baseline",
            baseline.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("All required variables are present"));
}

#[test]
fn test_check_fails_on_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let env = dir.path().join(".env");
    let baseline = dir.path().join(".env.example");
    write(&env, "DB_HOST=localhost\n");
    write(&baseline, "DB_HOST=\nAPI_KEY=\nSECRET=\n");

    envdiff()
        .args([
            "check",
            env.to_str().unwrap(),
            "--baseline",
            baseline.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("MISSING_REQUIRED"))
        .stdout(predicate::str::contains("API_KEY"))
        .stdout(predicate::str::contains("SECRET"));
}

#[test]
fn test_check_empty_baseline_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let env = dir.path().join(".env");
    let baseline = dir.path().join(".env.example");
    write(&env, "KEY=1\n");
    write(&baseline, "# nothing required\n");

    envdiff()
        .args([
            "check",
            env.to_str().unwrap(),
            "--baseline",
            baseline.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No baseline file found or baseline is empty",
        ));
}

#[test]
fn test_audit_fails_on_error_findings() {
    let dir = tempfile::tempdir().unwrap();
    let env = dir.path().join(".env");
    write(&env, "PASSWORD=admin\n");

    envdiff()
        .args(["audit", env.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ERROR] SECRET_IN_PLAIN"));
}

#[test]
fn test_audit_warnings_only_exits_clean() {
    let dir = tempfile::tempdir().unwrap();
    let env = dir.path().join(".env");
    write(&env, "PRODUCTION_URL=http://localhost:3000\n");

    envdiff()
        .args(["audit", env.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[WARN] LOCALHOST_IN_PROD"));
}

#[test]
fn test_audit_clean_file() {
    let dir = tempfile::tempdir().unwrap();
    let env = dir.path().join(".env");
    write(&env, "DB_HOST=db.internal\nPORT=5432\n");

    envdiff()
        .args(["audit", env.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_audit_severity_filter_drops_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let env = dir.path().join(".env");
    write(&env, "PRODUCTION_URL=http://localhost:3000\n");

    envdiff()
        .args(["audit", env.to_str().unwrap(), "--severity", "error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_audit_markdown_format() {
    let dir = tempfile::tempdir().unwrap();
    let env = dir.path().join(".env");
    write(&env, "SECRET=changeme\n");

    envdiff()
        .args(["audit", env.to_str().unwrap(), "--format", "markdown"])
        .assert()
        .stdout(predicate::str::contains("# Environment Audit Report"))
        .stdout(predicate::str::contains("WEAK_DEFAULT"));
}
