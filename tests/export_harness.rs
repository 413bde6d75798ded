//! Export integration harness.
//!
//! # What this covers
//!
//! - **Rendering**: one line per table row, cells joined by a single tab, no
//!   trailing newline, values written as-is.
//! - **Files**: the default extension is applied only when the name has none;
//!   exporting nothing is a distinct warning; I/O failures leave the table
//!   untouched.
//!
//! # Running
//!
//! ```sh
//! cargo test --test export_harness
//! # Update snapshots after intentional changes:
//! cargo insta review
//! ```

mod common;
use common::*;

use cdrview::export::{self, ExportError};
use cdrview::{normalize, open, Notification, RawTable, ResultTable, Severity};
use pretty_assertions::assert_eq;

fn sparse_table() -> ResultTable {
    let raw: RawTable = vec![RawRecordBuilder::new()
        .field("Caller Number", "555-1234")
        .field("Cost", "0.50")
        .build()]
    .into();
    normalize(Some(&raw))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn sparse_table_renders_two_tab_joined_lines() {
    let rendered = export::render(&sparse_table());
    assert!(!rendered.ends_with('\n'));
    insta::assert_snapshot!(rendered.replace('\t', " | "), @r"
    Call Start Time | Call End Time | Duration | Caller Number | Receiver Number | Call Type | Country | Tower ID | ISP Name | Cost | Call Status
    N/A | N/A | N/A | 555-1234 | N/A | N/A | N/A | N/A | N/A | 0.50 | N/A
    ");
}

#[test]
fn no_data_renders_marker_only() {
    assert_eq!(export::render(&ResultTable::NoData), cdrview::NO_DATA_MARKER);
}

#[test]
fn header_only_table_renders_header_only() {
    let rendered = export::render(&normalize(Some(&Default::default())));
    assert_eq!(rendered, cdrview::OUTPUT_SCHEMA.join("\t"));
}

#[test]
fn every_corpus_exports_four_lines() {
    let dir = tempfile::tempdir().unwrap();
    for input in write_all_corpora(dir.path()) {
        let rendered = export::render(&open(&input).table);
        assert_eq!(rendered.split('\n').count(), 4, "{}", input.display());
        assert!(rendered.split('\n').all(|line| line.split('\t').count() == 11));
    }
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn write_adds_default_extension() {
    let dir = tempfile::tempdir().unwrap();
    let table = sparse_table();
    let written = export::write(Some(&table), &dir.path().join("results"), "txt").unwrap();

    assert_eq!(written, dir.path().join("results.txt"));
    assert_eq!(std::fs::read_to_string(&written).unwrap(), export::render(&table));
    assert_eq!(
        Notification::saved(&written).message,
        format!("Results saved to {}", written.display())
    );
}

#[test]
fn write_keeps_explicit_extension() {
    let dir = tempfile::tempdir().unwrap();
    let written =
        export::write(Some(&sparse_table()), &dir.path().join("results.tsv"), "txt").unwrap();
    assert_eq!(written, dir.path().join("results.tsv"));
}

#[test]
fn nothing_to_write_is_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("results.txt");

    let err = export::write(None, &target, "txt").unwrap_err();
    assert!(matches!(err, ExportError::NoResults));
    assert!(!target.exists());

    let notification = Notification::from(&err);
    assert_eq!(notification.severity, Severity::Warning);
    assert_eq!(notification.message, "There are no results to save");
}

#[test]
fn unwritable_target_is_an_error_and_table_survives() {
    let dir = tempfile::tempdir().unwrap();
    let table = sparse_table();
    let before = table.clone();

    let err = export::write(Some(&table), &dir.path().join("missing/dir/out.txt"), "txt")
        .unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));

    let notification = Notification::from(&err);
    assert_eq!(notification.severity, Severity::Error);
    assert!(notification.message.starts_with("Error saving file: "));
    assert_eq!(table, before);
}

#[test]
fn no_data_table_can_be_saved() {
    let dir = tempfile::tempdir().unwrap();
    let written = export::write(Some(&ResultTable::NoData), &dir.path().join("empty"), "txt")
        .unwrap();
    assert_eq!(std::fs::read_to_string(written).unwrap(), cdrview::NO_DATA_MARKER);
}
