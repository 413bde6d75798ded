//! Export — writes a [`ResultTable`] as flat tab-separated text.
//!
//! One line per row (header or marker first), cells joined by a single tab,
//! lines joined by `\n` with no trailing newline. Values are written as-is:
//! embedded tabs and newlines are not escaped.

use crate::types::ResultTable;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cell separator in exported text.
pub const FIELD_SEPARATOR: &str = "\t";

/// Row separator in exported text.
pub const ROW_SEPARATOR: &str = "\n";

/// Failures of [`write`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing is loaded (or the display was cleared). A warning, not a failure.
    #[error("there are no results to save")]
    NoResults,

    #[error("error saving file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the table as tab-separated text.
pub fn render(table: &ResultTable) -> String {
    table
        .rows()
        .iter()
        .map(|row| row.join(FIELD_SEPARATOR))
        .collect::<Vec<_>>()
        .join(ROW_SEPARATOR)
}

/// Write `table` to `path`, appending `default_extension` when `path` has none.
///
/// Returns the path actually written. The table itself is never modified, so
/// a failed write leaves the caller's state intact.
pub fn write(
    table: Option<&ResultTable>,
    path: &Path,
    default_extension: &str,
) -> Result<PathBuf, ExportError> {
    let Some(table) = table else {
        tracing::warn!(path = %path.display(), "export: nothing to save");
        return Err(ExportError::NoResults);
    };

    let path = with_default_extension(path, default_extension);
    std::fs::write(&path, render(table)).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "export: write failed");
        ExportError::Io { path: path.clone(), source }
    })?;

    tracing::info!(path = %path.display(), rows = table.row_count(), "export: results saved");
    Ok(path)
}

/// `path` unchanged if it already has an extension, otherwise `path.<ext>`.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    if path.extension().is_some() || extension.is_empty() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use crate::types::{RawRecord, RawTable, OUTPUT_SCHEMA};
    use pretty_assertions::assert_eq;

    fn sample() -> ResultTable {
        let table: RawTable = vec![RawRecord::new().with("Cost", "0.50")].into();
        normalize(Some(&table))
    }

    #[test]
    fn render_joins_with_tabs_and_newlines() {
        let text = render(&sample());
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], OUTPUT_SCHEMA.join("\t"));
        assert_eq!(lines[1].split('\t').nth(9), Some("0.50"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn render_no_data() {
        assert_eq!(render(&ResultTable::NoData), "No data to analyze");
    }

    #[test]
    fn render_does_not_escape_values() {
        let table: RawTable = vec![RawRecord::new().with("Country", "a\tb")].into();
        let text = render(&normalize(Some(&table)));
        assert_eq!(text.lines().nth(1).map(|l| l.split('\t').count()), Some(12));
    }

    #[test]
    fn default_extension_only_when_missing() {
        assert_eq!(with_default_extension(Path::new("out"), "txt"), PathBuf::from("out.txt"));
        assert_eq!(with_default_extension(Path::new("out"), ".txt"), PathBuf::from("out.txt"));
        assert_eq!(with_default_extension(Path::new("out.tsv"), "txt"), PathBuf::from("out.tsv"));
        assert_eq!(with_default_extension(Path::new("out"), ""), PathBuf::from("out"));
    }

    #[test]
    fn write_without_results_is_no_results() {
        let dir = tempfile::tempdir().unwrap();
        let err = write(None, &dir.path().join("x"), "txt").unwrap_err();
        assert!(matches!(err, ExportError::NoResults));
        assert!(!dir.path().join("x.txt").exists());
    }

    #[test]
    fn write_creates_file_with_default_extension() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample();
        let written = write(Some(&table), &dir.path().join("results"), "txt").unwrap();
        assert_eq!(written, dir.path().join("results.txt"));
        assert_eq!(std::fs::read_to_string(written).unwrap(), render(&table));
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.txt");
        let err = write(Some(&sample()), &target, "txt").unwrap_err();
        match err {
            ExportError::Io { path, .. } => assert_eq!(path, target),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
