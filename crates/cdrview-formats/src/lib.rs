//! cdrview-formats — CDR file loaders.
//!
//! [`load`] turns a file path into a [`RawTable`]. The format is chosen purely
//! from the file-name suffix, case-sensitively, by walking [`FORMATS`] in
//! order; the extension is checked before the file is touched.
//!
//! | Suffix  | Format                            |
//! |---------|-----------------------------------|
//! | `.csv`  | comma-separated text, header row  |
//! | `.json` | top-level array of objects        |
//! | `.xml`  | attributes of the root's children |
//! | `.txt`  | tab-separated text, header row    |
//!
//! [`open`] is the pipeline step the presentation layer calls: it runs load
//! and normalise and turns any [`LoadError`] into a notification plus the
//! no-data table, so no error escapes past it.

pub mod delimited;
pub mod error;
pub mod json;
pub mod xml;

pub use error::{LoadError, ParseFormat};

use cdrview_core::{normalize, Notification, RawTable, ResultTable};
use phf::phf_ordered_map;
use std::path::Path;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

// ---------------------------------------------------------------------------
// Format dispatch
// ---------------------------------------------------------------------------

/// A supported input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Csv,
    Json,
    Xml,
    /// Tab-separated `.txt`.
    Tsv,
}

/// Recognised suffixes, in match precedence.
pub static FORMATS: phf::OrderedMap<&'static str, SourceFormat> = phf_ordered_map! {
    ".csv" => SourceFormat::Csv,
    ".json" => SourceFormat::Json,
    ".xml" => SourceFormat::Xml,
    ".txt" => SourceFormat::Tsv,
};

impl SourceFormat {
    /// Pick the format for `path` from its file-name suffix.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        FORMATS
            .entries()
            .find_map(|(suffix, format)| name.ends_with(*suffix).then_some(*format))
    }

    /// Grammar family used to classify parse failures.
    pub fn family(self) -> ParseFormat {
        match self {
            SourceFormat::Csv | SourceFormat::Tsv => ParseFormat::Delimited,
            SourceFormat::Json => ParseFormat::Json,
            SourceFormat::Xml => ParseFormat::Xml,
        }
    }

    /// Parse already-decoded file content.
    pub fn parse(self, text: &str) -> anyhow::Result<RawTable> {
        match self {
            SourceFormat::Csv => delimited::parse(text, delimited::COMMA),
            SourceFormat::Tsv => delimited::parse(text, delimited::TAB),
            SourceFormat::Json => json::parse(text),
            SourceFormat::Xml => xml::parse(text),
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Json => write!(f, "json"),
            SourceFormat::Xml => write!(f, "xml"),
            SourceFormat::Tsv => write!(f, "tsv"),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load and parse the file at `path`.
///
/// Fails with [`LoadError::UnsupportedFormat`] before any I/O when the suffix
/// is not recognised. A file whose content is empty or whitespace-only is
/// [`LoadError::EmptyInput`]; a syntactically valid file with zero records is
/// an empty table.
pub fn load(path: impl AsRef<Path>) -> Result<RawTable, LoadError> {
    let path = path.as_ref();
    let result = load_inner(path);
    match &result {
        Ok(table) => {
            tracing::info!(path = %path.display(), records = table.len(), "load: file parsed")
        }
        Err(err) => tracing::warn!(path = %path.display(), error = %err, "load: failed"),
    }
    result
}

fn load_inner(path: &Path) -> Result<RawTable, LoadError> {
    let format = SourceFormat::detect(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), %format, "load: format detected");

    let raw = std::fs::read(path).map_err(|source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let bytes = raw.strip_prefix(&UTF8_BOM).unwrap_or(raw.as_slice());
    let text = std::str::from_utf8(bytes).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        format: format.family(),
        detail: format!("invalid UTF-8: {e}"),
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyInput { path: path.to_path_buf() });
    }

    format.parse(text).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        format: format.family(),
        detail: format!("{e:#}"),
    })
}

// ---------------------------------------------------------------------------
// Pipeline step
// ---------------------------------------------------------------------------

/// Result of [`open`]: the table to display, plus a notification when the
/// load failed.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub table: ResultTable,
    pub notification: Option<Notification>,
}

impl LoadOutcome {
    pub fn is_failure(&self) -> bool {
        self.notification.is_some()
    }
}

/// Load and normalise `path`. Never fails: a [`LoadError`] becomes an error
/// notification and [`ResultTable::NoData`].
pub fn open(path: impl AsRef<Path>) -> LoadOutcome {
    match load(path) {
        Ok(raw) => LoadOutcome {
            table: normalize(Some(&raw)),
            notification: None,
        },
        Err(err) => LoadOutcome {
            table: normalize(None),
            notification: Some(Notification::from(&err)),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
