use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{Library, UNTAGGED, WITH_STUDIO, other_date, target_date};

fn sweep(library: &Library, extra: &[&str]) -> assert_cmd::assert::Assert {
    Command::new(env!("CARGO_BIN_EXE_nfo_sweep"))
        .args(["--date", "2025-04-17"])
        .args(extra)
        .arg(library.path())
        .assert()
}

#[test]
fn renames_both_untagged_files() {
    let library = Library::new();
    let a = library.write("Actor/a.nfo", UNTAGGED, target_date());
    library.write("Actor/b.nfo", UNTAGGED, target_date());

    sweep(&library, &[])
        .success()
        .stdout(predicate::str::contains(format!(
            "Renamed: {} -> {}",
            a.display(),
            library.join("Actor/a.invalidnfo").display()
        )));

    assert!(library.exists("Actor/a.invalidnfo"));
    assert!(library.exists("Actor/b.invalidnfo"));
    assert!(!library.exists("Actor/a.nfo"));
    assert_eq!(fs::read_to_string(library.join("Actor/a.invalidnfo")).unwrap(), UNTAGGED);
}

#[test]
fn custom_invalid_extension_keeps_its_case() {
    let library = Library::new();
    library.write("Actor/a.nfo", UNTAGGED, target_date());
    library.write("Actor/b.nfo", UNTAGGED, target_date());

    sweep(&library, &["--invalid-ext", ".BadNFO"])
        .success()
        .stdout(predicate::str::contains("a.BadNFO"));

    let mut names: Vec<String> = fs::read_dir(library.join("Actor"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.BadNFO", "b.BadNFO"]);
}

#[test]
fn lone_file_is_skipped() {
    let library = Library::new();
    library.write("Actor/a.nfo", UNTAGGED, target_date());
    library.write("Actor/a.mkv", "", target_date());

    sweep(&library, &[]).success().stdout(predicate::str::contains("Renamed").not());

    assert!(library.exists("Actor/a.nfo"));
}

#[test]
fn only_the_untagged_file_is_renamed() {
    let library = Library::new();
    library.write("Actor/a.nfo", WITH_STUDIO, target_date());
    library.write("Actor/b.nfo", UNTAGGED, target_date());

    sweep(&library, &[]).success();

    assert!(library.exists("Actor/a.nfo"));
    assert!(library.exists("Actor/b.invalidnfo"));
}

#[test]
fn other_dates_are_left_alone() {
    let library = Library::new();
    library.write("Actor/a.nfo", UNTAGGED, other_date());
    library.write("Actor/b.nfo", UNTAGGED, other_date());

    sweep(&library, &[]).success().stdout(predicate::str::is_empty());

    assert!(library.exists("Actor/a.nfo"));
    assert!(library.exists("Actor/b.nfo"));
}

#[test]
fn root_folder_and_nested_folders_are_both_swept() {
    let library = Library::new();
    library.write("a.nfo", UNTAGGED, target_date());
    library.write("b.NFO", UNTAGGED, target_date());
    library.write("X/Y/c.nfo", UNTAGGED, target_date());
    library.write("X/Y/d.nfo", "<genre>Drama</genre>", target_date());

    sweep(&library, &[]).success();

    assert!(library.exists("a.invalidnfo"));
    assert!(library.exists("b.invalidnfo"));
    assert!(library.exists("X/Y/c.invalidnfo"));
    assert!(library.exists("X/Y/d.nfo"));
}

#[test]
fn undecodable_file_is_reported_and_siblings_continue() {
    let library = Library::new();
    let bad = library.write("Actor/a.nfo", b"<movie>\xff\xfe</movie>".as_slice(), target_date());
    library.write("Actor/b.nfo", UNTAGGED, target_date());

    sweep(&library, &["--decode", "strict"])
        .success()
        .stderr(predicate::str::contains(format!("Error reading {}:", bad.display())));

    assert!(library.exists("Actor/a.nfo"));
    assert!(library.exists("Actor/b.invalidnfo"));
}

#[test]
fn ignore_mode_drops_bad_bytes_and_still_finds_markers() {
    let library = Library::new();
    library.write("Actor/a.nfo", b"<stu\xffdio>".as_slice(), target_date());
    library.write("Actor/b.nfo", b"\xff<genre>x</genre>".as_slice(), target_date());

    sweep(&library, &[]).success();

    assert!(library.exists("Actor/a.nfo"));
    assert!(library.exists("Actor/b.nfo"));
}

#[test]
fn existing_destination_is_a_rename_error() {
    let library = Library::new();
    let a = library.write("Actor/a.nfo", UNTAGGED, target_date());
    library.write("Actor/a.invalidnfo", "kept", other_date());
    library.write("Actor/b.nfo", UNTAGGED, target_date());

    sweep(&library, &[])
        .success()
        .stderr(predicate::str::contains(format!("Error renaming {}:", a.display())));

    assert!(library.exists("Actor/a.nfo"));
    assert_eq!(fs::read_to_string(library.join("Actor/a.invalidnfo")).unwrap(), "kept");
    assert!(library.exists("Actor/b.invalidnfo"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_reported_and_siblings_continue() {
    use std::os::unix::fs::PermissionsExt;

    let library = Library::new();
    let locked = library.write("Actor/a.nfo", UNTAGGED, target_date());
    library.write("Actor/b.nfo", UNTAGGED, target_date());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read(&locked).is_ok() {
        // Running with privileges that bypass file modes.
        return;
    }

    sweep(&library, &[])
        .success()
        .stderr(predicate::str::contains(format!("Error reading {}:", locked.display())));

    assert!(library.exists("Actor/a.nfo"));
    assert!(library.exists("Actor/b.invalidnfo"));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}

#[test]
fn dry_run_touches_nothing() {
    let library = Library::new();
    library.write("Actor/a.nfo", UNTAGGED, target_date());
    library.write("Actor/b.nfo", UNTAGGED, target_date());

    sweep(&library, &["--dry-run"])
        .success()
        .stdout(predicate::str::contains("Would rename:"))
        .stdout(predicate::str::contains("Renamed:").not());

    assert!(library.exists("Actor/a.nfo"));
    assert!(library.exists("Actor/b.nfo"));
}

#[test]
fn second_run_renames_nothing() {
    let library = Library::new();
    library.write("Actor/a.nfo", UNTAGGED, target_date());
    library.write("Actor/b.nfo", UNTAGGED, target_date());

    sweep(&library, &[]).success();
    sweep(&library, &[]).success().stdout(predicate::str::contains("Renamed").not());
}

#[test]
fn custom_markers_and_min_files() {
    let library = Library::new();
    library.write("Actor/a.nfo", "<set>Saga</set>", target_date());
    library.write("Solo/only.nfo", WITH_STUDIO, target_date());

    sweep(&library, &["--min-files", "1", "--marker", "<set>"]).success();

    assert!(library.exists("Actor/a.nfo"));
    assert!(library.exists("Solo/only.invalidnfo"));
}

#[test]
fn json_summary_is_printed_to_stdout() {
    let library = Library::new();
    library.write("Actor/a.nfo", UNTAGGED, target_date());
    library.write("Actor/b.nfo", WITH_STUDIO, target_date());

    let output = Command::new(env!("CARGO_BIN_EXE_nfo_sweep"))
        .args(["--date", "2025-04-17", "--dry-run", "--format", "json"])
        .arg(library.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(summary["dry_run"], true);
    assert_eq!(summary["files_inspected"], 2);
    assert_eq!(summary["files_invalid"], 1);
    assert_eq!(summary["files_renamed"], 0);
}
