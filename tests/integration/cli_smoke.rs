use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Library;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nfo_sweep"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--date"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn date_is_required() {
    let library = Library::new();
    bin().arg(library.path()).assert().failure().stderr(predicate::str::contains("--date"));
}

#[test]
fn malformed_date_is_rejected() {
    let library = Library::new();
    bin()
        .args(["--date", "17/04/2025"])
        .arg(library.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse date"));
}

#[test]
fn missing_root_fails() {
    let library = Library::new();
    bin()
        .args(["--date", "2025-04-17"])
        .arg(library.join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn identical_extensions_fail_before_walking() {
    let library = Library::new();
    bin()
        .args(["--date", "2025-04-17", "--ext", "nfo", "--invalid-ext", ".NFO"])
        .arg(library.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
