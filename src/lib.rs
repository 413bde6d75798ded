//! cdrview — call-detail-record viewer
//!
//! Loads CDR exports in CSV, tab-separated TXT, JSON or XML, normalises every
//! record onto one fixed 11-column schema, and displays or exports the result
//! as tab-separated text. This crate re-exports the layers so integration
//! tests and the binary share one import path.
//!
//! # Architecture
//!
//! ```text
//! formats::load ──► core::normalize ──► tui (interactive)
//!                          │
//!                          └──► core::export (`:save`, `cdrview export`)
//! ```
//!
//! Everything is synchronous: one load-and-normalise runs to completion and
//! its table replaces the previous one.

pub mod headless;

pub use cdrview_core::{
    config, export, normalize, normalizer, NormalizedRow, Notification, RawRecord, RawTable,
    ResultTable, Severity, COLUMN_COUNT, NOT_AVAILABLE, NO_DATA_MARKER, OUTPUT_SCHEMA,
};
pub use cdrview_formats::{load, open, LoadError, LoadOutcome, ParseFormat, SourceFormat};
