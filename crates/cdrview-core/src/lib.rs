//! cdrview-core — call-detail-record normalisation core.
//!
//! This crate holds the data model shared by every layer, the schema
//! normaliser, the flat-text exporter, user notifications and configuration.
//! Format parsing lives in `cdrview-formats`; display in `cdrview-tui`.
//!
//! # Pipeline
//!
//! ```text
//! FormatLoader ──► RawTable ──► Normalizer ──► ResultTable ──► UI
//!                                                   │
//!                                                   └──► Export
//! ```
//!
//! Everything is synchronous: one load-and-normalise runs to completion before
//! the next starts, and each produces an independent [`ResultTable`].

pub mod config;
pub mod export;
pub mod normalizer;
pub mod notification;
pub mod types;

pub use normalizer::normalize;
pub use notification::{Notification, Severity};
pub use types::{
    NormalizedRow, RawRecord, RawTable, ResultTable, COLUMN_COUNT, NOT_AVAILABLE,
    NO_DATA_MARKER, OUTPUT_SCHEMA,
};
