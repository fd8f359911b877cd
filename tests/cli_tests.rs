//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn folder_scan() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("folder-scan"))
}

fn report_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("entry").path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("scan_report_") && n.ends_with(".txt"))
        })
        .collect()
}

#[test]
fn test_cli_version() {
    folder_scan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folder-scan"));
}

#[test]
fn test_cli_help() {
    folder_scan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ext"))
        .stdout(predicate::str::contains("--min-size"));
}

#[test]
fn test_missing_folder_argument_fails() {
    let cwd = TempDir::new().expect("cwd");
    folder_scan()
        .current_dir(cwd.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("FOLDER"));
    assert!(report_files(cwd.path()).is_empty());
}

#[test]
fn test_invalid_min_size_fails_before_scanning() {
    let cwd = TempDir::new().expect("cwd");
    folder_scan()
        .current_dir(cwd.path())
        .args([".", "--min-size", "lots"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Scanning folder").not());
    assert!(report_files(cwd.path()).is_empty());
}

#[test]
fn test_nonexistent_folder_fails_without_report() {
    let cwd = TempDir::new().expect("cwd");
    folder_scan()
        .current_dir(cwd.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    assert!(report_files(cwd.path()).is_empty());
}

#[test]
fn test_file_path_is_not_a_folder() {
    let cwd = TempDir::new().expect("cwd");
    fs::write(cwd.path().join("plain.txt"), "x").expect("write");

    folder_scan()
        .current_dir(cwd.path())
        .arg("plain.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a folder"));
    assert!(report_files(cwd.path()).is_empty());
}

#[test]
fn test_report_file_matches_stdout() {
    let data = TempDir::new().expect("data");
    let cwd = TempDir::new().expect("cwd");
    fs::write(data.path().join("app.log"), vec![b'a'; 2048]).expect("write log");
    fs::create_dir(data.path().join("nested")).expect("mkdir");
    fs::write(data.path().join("nested/notes.TXT"), "hello").expect("write txt");
    fs::write(data.path().join("nested/Makefile"), "all:").expect("write makefile");

    let output = folder_scan()
        .current_dir(cwd.path())
        .arg(data.path())
        .output()
        .expect("run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let files = report_files(cwd.path());
    assert_eq!(files.len(), 1, "exactly one report file expected");

    let report = fs::read_to_string(&files[0]).expect("read report");
    assert!(stdout.contains(&format!("{}\n\nReport saved to: ", report)));
    assert!(report.contains("Total Files: 3"));
    assert!(report.contains("Largest File: app.log"));
    assert!(report.contains(".no-extension"));
    assert!(report.contains(".txt"));
    assert!(!report.ends_with('\n'));
}

#[test]
fn test_extension_filter_variants_agree() {
    let data = TempDir::new().expect("data");
    fs::write(data.path().join("a.txt"), "aaaa").expect("write");
    fs::write(data.path().join("b.TXT"), "bb").expect("write");
    fs::write(data.path().join("c.md"), "c").expect("write");

    for ext in ["txt", ".TXT"] {
        let cwd = TempDir::new().expect("cwd");
        folder_scan()
            .current_dir(cwd.path())
            .args([data.path().to_str().expect("utf8 path"), "--ext", ext])
            .assert()
            .success()
            .stdout(predicate::str::contains("Filtering by extension: .txt"))
            .stdout(predicate::str::contains("Filter: .txt files only"))
            .stdout(predicate::str::contains("Total Files: 2"))
            .stdout(predicate::str::contains("Total Size: 6.00 B"));
    }
}

#[test]
fn test_min_size_and_output_dir() {
    let data = TempDir::new().expect("data");
    let cwd = TempDir::new().expect("cwd");
    fs::write(data.path().join("small.bin"), vec![0u8; 99]).expect("write");
    fs::write(data.path().join("edge.bin"), vec![0u8; 100]).expect("write");
    fs::write(data.path().join("big.bin"), vec![0u8; 500]).expect("write");

    folder_scan()
        .current_dir(cwd.path())
        .args([
            data.path().to_str().expect("utf8 path"),
            "--min-size",
            "100",
            "--output-dir",
            "out",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum Size: 100 bytes (100.00 B)"))
        .stdout(predicate::str::contains("Total Files: 2"));

    assert!(report_files(cwd.path()).is_empty());
    assert_eq!(report_files(&cwd.path().join("out")).len(), 1);
}

#[test]
fn test_empty_folder_reports_no_files() {
    let data = TempDir::new().expect("data");
    let cwd = TempDir::new().expect("cwd");

    folder_scan()
        .current_dir(cwd.path())
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Files: 0"))
        .stdout(predicate::str::contains("No files found"))
        .stdout(predicate::str::contains("FILE TYPES BREAKDOWN").not());
}

#[test]
fn test_config_file_supplies_filter() {
    let data = TempDir::new().expect("data");
    let cwd = TempDir::new().expect("cwd");
    fs::write(data.path().join("keep.rs"), "fn main() {}").expect("write");
    fs::write(data.path().join("drop.py"), "print()").expect("write");
    fs::write(cwd.path().join("folder-scan.toml"), "ext = 'rs'\n").expect("write config");

    folder_scan()
        .current_dir(cwd.path())
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter: .rs files only"))
        .stdout(predicate::str::contains("Total Files: 1"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let data = TempDir::new().expect("data");
    let cwd = TempDir::new().expect("cwd");

    folder_scan()
        .current_dir(cwd.path())
        .args([data.path().to_str().expect("utf8 path"), "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed reading config file"));
}
