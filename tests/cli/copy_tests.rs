use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn cpdir() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cpdir"))
}

#[cfg(unix)]
fn running_as_root() -> bool {
    use std::os::unix::fs::MetadataExt;
    fs::metadata("/proc/self").is_ok_and(|m| m.uid() == 0)
}

#[test]
fn copies_tree_silently() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "hello");
    ws.create_file("sub/b.txt", "world");
    ws.create_file(".git/HEAD", "ref: refs/heads/main");

    cpdir()
        .arg(ws.src())
        .arg(ws.dst())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(ws.read_dst("a.txt"), "hello");
    assert_eq!(ws.read_dst("sub/b.txt"), "world");
    assert!(ws.dst().join("sub").is_dir());
    assert!(!ws.dst().join(".git").exists());
}

#[cfg(unix)]
#[test]
fn preserves_file_modes() {
    use std::os::unix::fs::PermissionsExt;

    let ws = TempWorkspace::new();
    let a = ws.create_file("a.txt", "hello");
    ws.set_mode(&a, 0o644);
    let script = ws.create_file("bin/run", "#!/bin/sh\n");
    ws.set_mode(&script, 0o755);

    cpdir().arg(ws.src()).arg(ws.dst()).assert().success();

    let mode = |p: &std::path::Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&ws.dst().join("a.txt")), 0o644);
    assert_eq!(mode(&ws.dst().join("bin").join("run")), 0o755);
}

#[test]
fn second_run_overwrites_existing_files() {
    let ws = TempWorkspace::new();
    let a = ws.create_file("a.txt", "first");

    cpdir().arg(ws.src()).arg(ws.dst()).assert().success();
    fs::write(&a, "second").unwrap();
    cpdir().arg(ws.src()).arg(ws.dst()).assert().success();

    assert_eq!(ws.read_dst("a.txt"), "second");
}

#[test]
fn missing_source_reports_path_and_fails() {
    let ws = TempWorkspace::new();
    let missing = ws.path().join("missing");

    cpdir()
        .arg(&missing)
        .arg(ws.dst())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(format!(
            "cpdir: {}: ",
            missing.display()
        )));
}

#[test]
fn text_report_summarises_run() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "hello");
    ws.create_file("sub/b.txt", "world");

    cpdir()
        .args(["--report", "text"])
        .arg(ws.src())
        .arg(ws.dst())
        .assert()
        .success()
        .stdout("files=2 dirs=2 bytes=10 skipped=0 errors=0\n");
}

#[test]
fn json_report_is_machine_readable() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "hello");

    let output = cpdir()
        .args(["--report", "json"])
        .arg(ws.src())
        .arg(ws.dst())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files_copied"], 1);
    assert_eq!(json["bytes_copied"], 5);
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn refuses_to_copy_into_itself() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "hello");

    cpdir()
        .arg(ws.src())
        .arg(ws.src().join("inner"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("inside the source tree"));

    assert!(!ws.src().join("inner").exists());
}

#[test]
fn copies_into_hidden_directory_of_source() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "hello");
    let backup = ws.src().join(".backup");

    cpdir().arg(ws.src()).arg(&backup).assert().success();

    assert_eq!(fs::read_to_string(backup.join("a.txt")).unwrap(), "hello");
    assert!(!backup.join(".backup").exists());
}

#[cfg(unix)]
#[test]
fn unreadable_file_aborts_by_default() {
    if running_as_root() {
        return;
    }
    let ws = TempWorkspace::new();
    let locked = ws.create_file("locked.txt", "secret");
    ws.set_mode(&locked, 0o000);

    cpdir()
        .arg(ws.src())
        .arg(ws.dst())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "cpdir: {}: ",
            locked.display()
        )));

    ws.set_mode(&locked, 0o600);
}

#[cfg(unix)]
#[test]
fn keep_going_copies_the_rest() {
    if running_as_root() {
        return;
    }
    let ws = TempWorkspace::new();
    let locked = ws.create_file("locked.txt", "secret");
    ws.set_mode(&locked, 0o000);
    ws.create_file("ok.txt", "fine");
    ws.create_file("sub/deep.txt", "fine too");

    cpdir()
        .arg("--keep-going")
        .arg(ws.src())
        .arg(ws.dst())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("locked.txt"));

    assert_eq!(ws.read_dst("ok.txt"), "fine");
    assert_eq!(ws.read_dst("sub/deep.txt"), "fine too");
    ws.set_mode(&locked, 0o600);
}
