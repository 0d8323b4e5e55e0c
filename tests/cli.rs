//! End-to-end runs of the `bench-mean` and `generate_sample` binaries
//! against files in a scratch directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn bench_mean(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bench-mean"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bench-mean")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn default_files_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("array.txt"), "0 1.0\n1 2.0\n2 3.0\n").unwrap();
    fs::write(dir.path().join("rbtree.txt"), "0 5.0\n").unwrap();
    fs::write(dir.path().join("rbtreev2.txt"), "3 10.5\n1 9.5\n2 11.0\n").unwrap();

    let out = bench_mean(dir.path(), &[]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        stdout(&out),
        "array mean: 2.0\nrbtree mean: 5.0\nrbtree v2 mean: 10.333333333333334\n"
    );
}

fn write_three(dir: &Path) {
    fs::write(dir.join("array.txt"), "0 1.0\n1 2.0\n2 3.0\n").unwrap();
    fs::write(dir.join("rbtree.txt"), "0 5.0\n").unwrap();
    fs::write(dir.join("rbtreev2.txt"), "0 1\n1 2\n").unwrap();
}

const THREE_LINES: &str = "array mean: 2.0\nrbtree mean: 5.0\nrbtree v2 mean: 1.5\n";

#[test]
fn verbose_logging_stays_off_stdout() {
    let dir = tempdir().unwrap();
    write_three(dir.path());

    let out = bench_mean(dir.path(), &["-vv"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout(&out), THREE_LINES);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("array.txt: 3 value(s) from column 1"), "{stderr}");
    assert!(stderr.contains("rbtreev2.txt: 2 value(s) from column 1"), "{stderr}");
    assert!(stderr.contains("rbtree.txt): 1 row(s), mean 5"), "{stderr}");
}

#[test]
fn rust_log_debug_stays_off_stdout() {
    let dir = tempdir().unwrap();
    write_three(dir.path());

    let out = Command::new(env!("CARGO_BIN_EXE_bench-mean"))
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run bench-mean");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout(&out), THREE_LINES);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("rbtree.txt: 1 value(s) from column 1"), "{stderr}");
}

#[test]
fn quiet_by_default() {
    let dir = tempdir().unwrap();
    write_three(dir.path());

    let out = bench_mean(dir.path(), &[]);
    assert_eq!(stdout(&out), THREE_LINES);
    assert!(out.stderr.is_empty(), "{}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn missing_file_fails_without_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("array.txt"), "0 1.0\n").unwrap();
    fs::write(dir.path().join("rbtreev2.txt"), "0 1.0\n").unwrap();

    let out = bench_mean(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("rbtree.txt"), "{stderr}");
}

#[test]
fn malformed_column_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("array.txt"), "0 1.0\n1 oops\n").unwrap();
    fs::write(dir.path().join("rbtree.txt"), "0 1.0\n").unwrap();
    fs::write(dir.path().join("rbtreev2.txt"), "0 1.0\n").unwrap();

    let out = bench_mean(dir.path(), &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'oops' is not a number"), "{stderr}");
}

#[test]
fn explicit_series_and_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("list.csv"), "0,4\n1,8\n").unwrap();

    let out = bench_mean(dir.path(), &["-s", "list=list.csv", "--format", "json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value[0]["label"], "list");
    assert_eq!(value[0]["mean"], 6.0);
    assert_eq!(value[0]["min"], 4.0);
    assert_eq!(value[0]["max"], 8.0);
}

#[test]
fn generated_samples_round_trip_through_report() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("runs");

    let gen = Command::new(env!("CARGO_BIN_EXE_generate_sample"))
        .args(["--out", data.to_str().unwrap(), "--runs", "50", "--seed", "7"])
        .output()
        .unwrap();
    assert!(gen.status.success(), "{}", String::from_utf8_lossy(&gen.stderr));

    let out = bench_mean(dir.path(), &["--dir", "runs", "--summary"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("array mean: "));
    assert!(lines[1].starts_with("rbtree mean: "));
    assert!(lines[2].starts_with("rbtree v2 mean: "));
    for line in lines {
        assert!(line.contains("(n=50, "), "{line}");
    }
}
