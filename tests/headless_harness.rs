//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `cdrview export` as a compiled binary via
//! [`std::process::Command`]. It validates the contract from the outside,
//! the way a shell script would see it.
//!
//! - **stdout**: without `-o`, the tab-separated rendering is printed.
//! - **Files**: with `-o`, the file is written with the default extension.
//! - **Exit codes**: clean export = 0; load failure or bad flags = non-zero.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (that requires a real terminal)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};

fn cdrview(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cdrview"))
        .args(args)
        // Keep the first-run config file out of the real home directory.
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn cdrview")
}

#[test]
fn export_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "calls.csv", CORPUS_CSV);

    let out = cdrview(dir.path(), &["export", input.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], cdrview::OUTPUT_SCHEMA.join("\t"));
    assert_eq!(lines[1], FIRST_CALL.join("\t"));
}

#[test]
fn export_to_file_adds_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "calls.json", CORPUS_JSON);
    let output = dir.path().join("report");

    let out = cdrview(
        dir.path(),
        &["export", input.to_str().unwrap(), "-o", output.to_str().unwrap()],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    let written = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert_eq!(written.lines().count(), 4);
    assert!(String::from_utf8_lossy(&out.stderr).contains("Results saved to"));
}

#[test]
fn missing_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gone.csv");

    let out = cdrview(dir.path(), &["export", input.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("file not found"));
    assert!(out.stdout.is_empty());
}

#[test]
fn unsupported_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "calls.dat", CORPUS_CSV);

    let out = cdrview(dir.path(), &["export", input.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unsupported file format"));
}

#[test]
fn export_without_input_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = cdrview(dir.path(), &["export"]);
    assert!(!out.status.success());
}
