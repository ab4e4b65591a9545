//! End-to-end CLI tests driving the compiled `skillet` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn skillet() -> Command {
    Command::cargo_bin("skillet").expect("binary builds")
}

// ── help / version ─────────────────────────────────────────────────────────

#[test]
fn help_succeeds_on_stdout() {
    skillet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("skillet"))
        .stdout(predicate::str::contains("new"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_prints_crate_version_on_stdout() {
    skillet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_args_shows_help_and_fails() {
    skillet().assert().failure().code(2);
}

// ── argument validation ────────────────────────────────────────────────────

#[test]
fn new_requires_template_url() {
    skillet()
        .args(["new", "my-skill"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--template-url"));
}

#[test]
fn deploy_delegate_conflicts_with_self_hosted() {
    skillet()
        .args([
            "new",
            "my-skill",
            "--template-url",
            "https://example.invalid/t.git",
            "--deploy-delegate",
            "@ask-cli/cfn-deployer",
            "--self-hosted",
        ])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn quiet_conflicts_with_verbose() {
    skillet()
        .args(["--quiet", "-v", "completions", "bash"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn rejects_hidden_project_name() {
    let dir = tempfile::tempdir().unwrap();
    skillet()
        .current_dir(dir.path())
        .args([
            "new",
            ".hidden",
            "--template-url",
            "https://example.invalid/t.git",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn rejects_existing_project_folder() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("taken")).unwrap();

    skillet()
        .current_dir(dir.path())
        .args([
            "new",
            "taken",
            "--template-url",
            "https://example.invalid/t.git",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

// ── clone failures ─────────────────────────────────────────────────────────

#[test]
fn clone_failure_reports_the_url() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-template");

    skillet()
        .current_dir(dir.path())
        .args([
            "new",
            "my-skill",
            "--template-url",
            missing.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-template"));
}

// ── completions ────────────────────────────────────────────────────────────

#[test]
fn completions_bash_emits_a_script() {
    skillet()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skillet"));
}

#[test]
fn completions_rejects_unknown_shell() {
    skillet()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .code(2);
}
