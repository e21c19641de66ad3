//! The `flagfile` binary run against files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write flag file");
    path
}

fn run(command: &str, path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flagfile"))
        .arg(command)
        .arg(path)
        .output()
        .expect("run flagfile")
}

// ---------------------------------------------------------------------------
// validate / args
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_non_utf8_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(&dir, "latin1.flags", b"name caf\xe9\n");
    let out = run("validate", &path);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stderr).contains("valid (1 flag(s))"));
}

#[test]
fn args_prints_one_flag_per_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(&dir, "app.flags", b"user tim cooper\nverbose\n");
    let out = run("args", &path);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "-user=tim cooper\n-verbose\n");
}

#[test]
fn validate_reports_parse_error_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(&dir, "bad.flags", b"-\n");
    let out = run("validate", &path);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(&path.display().to_string()));
    assert!(stderr.contains("invalid token"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = run("validate", &dir.path().join("absent.flags"));
    assert!(!out.status.success());
}

// ---------------------------------------------------------------------------
// fmt / check
// ---------------------------------------------------------------------------

#[test]
fn check_accepts_formatted_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(&dir, "app.flags", b"user \"tim cooper\"\nverbose\n");
    assert!(run("check", &path).status.success());
}

#[test]
fn check_rejects_unformatted_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(&dir, "app.flags", b"# comment\nuser   tim\n");
    assert!(!run("check", &path).status.success());
}

#[test]
fn fmt_output_is_canonical() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(&dir, "app.flags", b"# comment\nuser   tim cooper\n");
    let out = run("fmt", &path);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "user \"tim cooper\"\n");
}
