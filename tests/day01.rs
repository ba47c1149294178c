use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A fresh working directory for one run of the binary.
fn scratch_dir(name: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("block_sums_{}_{}", name, id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn with_input(name: &str, contents: &str) -> PathBuf {
    let dir = scratch_dir(name);
    fs::create_dir_all(dir.join("inputs")).unwrap();
    fs::write(dir.join("inputs").join("day01a"), contents).unwrap();
    dir
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_day01"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run day01")
}

#[test]
fn test_prints_top_three_total() {
    let dir = with_input("ok", "1 2 3\n\n10 20\n\n100\n");

    let first = run_in(&dir);
    assert!(first.status.success());
    assert_eq!(String::from_utf8_lossy(&first.stdout), "136\n");

    let second = run_in(&dir);
    assert_eq!(first.stdout, second.stdout);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_empty_input_prints_zero() {
    let dir = with_input("empty", "\n  \n");

    let output = run_in(&dir);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_missing_input_fails() {
    let dir = scratch_dir("missing");

    let output = run_in(&dir);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("inputs/day01a"));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_bad_token_fails() {
    let dir = with_input("bad", "1\n\n12a\n");

    let output = run_in(&dir);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("\"12a\""));

    fs::remove_dir_all(dir).ok();
}
