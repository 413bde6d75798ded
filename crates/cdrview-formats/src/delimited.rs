//! Delimited-text loader (`.csv` with commas, `.txt` with tabs).
//!
//! The first row is the header. Header cells that are empty are named
//! `Unnamed: <index>`, and a repeated name `X` becomes `X.1`, `X.2`, … so the
//! first occurrence keeps the plain name. Cells are never trimmed.
//!
//! Rows may be ragged: a short row simply lacks its trailing fields, and
//! surplus cells past the header are tolerated as long as they are empty
//! (trailing delimiters). A non-empty surplus cell is a parse error.

use anyhow::{bail, Context};
use cdrview_core::{RawRecord, RawTable};
use std::collections::HashSet;

pub const COMMA: u8 = b',';
pub const TAB: u8 = b'\t';

/// Parse delimited `text` into a [`RawTable`].
pub fn parse(text: &str, delimiter: u8) -> anyhow::Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = header_names(reader.headers().context("reading header row")?);

    let mut table = RawTable::new();
    for (index, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("reading record {}", index + 1))?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() > headers.len() {
            if row.iter().skip(headers.len()).any(|cell| !cell.is_empty()) {
                bail!(
                    "line {line}: expected {} fields, saw {}",
                    headers.len(),
                    row.len()
                );
            }
            tracing::debug!(line, cells = row.len(), "delimited: ignoring empty trailing cells");
        } else if row.len() < headers.len() {
            tracing::debug!(line, cells = row.len(), "delimited: short row");
        }

        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.as_str(), cell))
            .collect();
        table.push(record);
    }

    Ok(table)
}

/// Turn the raw header row into unique field names.
fn header_names(raw: &csv::StringRecord) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::with_capacity(raw.len());
    raw.iter()
        .enumerate()
        .map(|(index, cell)| {
            let base = if cell.is_empty() {
                format!("Unnamed: {index}")
            } else {
                cell.to_string()
            };
            let mut name = base.clone();
            let mut n = 0;
            while used.contains(&name) {
                n += 1;
                name = format!("{base}.{n}");
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
