//! Integration tests driving the fmx binary.
//!
//! Each test writes a text file into a temp directory, runs the binary
//! with queries piped to stdin, and checks the printed counts and
//! locations, including the companion files left beside the text.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_fmx(dir: &TempDir, text: &[u8], args: &[&str], input: &str) -> String {
    let text_path = dir.path().join("corpus.txt");
    fs::write(&text_path, text).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_fmx"))
        .arg(&text_path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run fmx");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("fmx did not exit");

    assert!(
        output.status.success(),
        "fmx failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn exact_count_and_locations() {
    let dir = TempDir::new().unwrap();
    let stdout = run_fmx(&dir, b"banana", &[], "ana\n");

    assert!(stdout.contains("# of occurrences: 2"), "stdout: {stdout}");
    assert!(stdout.contains("1: "), "stdout: {stdout}");
    assert!(stdout.contains("3: "), "stdout: {stdout}");
}

#[test]
fn zero_occurrences_is_normal_output() {
    let dir = TempDir::new().unwrap();
    let stdout = run_fmx(&dir, b"banana", &[], "xyz\n");

    assert!(stdout.contains("# of occurrences: 0"), "stdout: {stdout}");
}

#[test]
fn one_mismatch_mode() {
    let dir = TempDir::new().unwrap();
    let stdout = run_fmx(&dir, b"banana", &["-k", "1"], "ann\n");

    assert!(stdout.contains("# of occurrences: 2"), "stdout: {stdout}");
    assert!(stdout.contains("ana"), "stdout: {stdout}");
}

#[test]
fn count_only_when_max_locations_is_zero() {
    let dir = TempDir::new().unwrap();
    let stdout = run_fmx(&dir, b"banana", &["--max-locations", "0"], "ana\n");

    assert!(stdout.contains("# of occurrences: 2"), "stdout: {stdout}");
    assert!(!stdout.contains("Location"), "stdout: {stdout}");
}

#[test]
fn blank_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let stdout = run_fmx(&dir, b"banana", &[], "\n\nana\n\n");

    assert_eq!(stdout.matches("# of occurrences").count(), 1);
}

#[test]
fn companion_files_are_created_and_reused() {
    let dir = TempDir::new().unwrap();

    let first = run_fmx(&dir, b"banana bandana", &[], "ana\n");
    assert!(first.contains("Building index now"), "stdout: {first}");

    let text_path = dir.path().join("corpus.txt");
    for suffix in [".fmx", ".rev.fmx", ".fmx.json"] {
        let mut companion = text_path.clone().into_os_string();
        companion.push(suffix);
        assert!(
            std::path::Path::new(&companion).exists(),
            "missing companion {suffix}"
        );
    }

    // Second run loads the persisted indexes instead of rebuilding
    let second = run_fmx(&dir, b"banana bandana", &[], "ana\n");
    assert!(!second.contains("Building index now"), "stdout: {second}");
    assert!(second.contains("# of occurrences: 3"), "stdout: {second}");
}

#[test]
fn missing_text_file_is_fatal() {
    let status = Command::new(env!("CARGO_BIN_EXE_fmx"))
        .arg("/nonexistent/corpus.txt")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();

    assert!(!status.success());
}
