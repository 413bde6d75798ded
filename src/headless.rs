//! Headless export: load → normalise → render without a terminal UI.
//!
//! Unlike the TUI, a load failure here is an error for the caller (the CLI
//! exits non-zero) rather than a no-data table.

use cdrview_core::{export, normalize, ResultTable};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Load and normalise `input`, propagating any load failure.
pub fn convert(input: &Path) -> Result<ResultTable, cdrview_formats::LoadError> {
    let raw = cdrview_formats::load(input)?;
    Ok(normalize(Some(&raw)))
}

/// Convert `input` and write the tab-separated rendering.
///
/// With `output`, the file is written (with `default_extension` applied when
/// the name has none) and its final path returned. Without, the rendering is
/// written to `out` followed by a newline and `None` is returned.
pub fn export(
    input: &Path,
    output: Option<&Path>,
    default_extension: &str,
    out: &mut dyn Write,
) -> anyhow::Result<Option<PathBuf>> {
    let table = convert(input)?;
    tracing::info!(input = %input.display(), rows = table.row_count(), "headless: converted");

    match output {
        Some(path) => Ok(Some(export::write(Some(&table), path, default_extension)?)),
        None => {
            out.write_all(export::render(&table).as_bytes())?;
            out.write_all(b"\n")?;
            out.flush()?;
            Ok(None)
        }
    }
}
