//! Normalizer — aligns [`RawRecord`]s to the fixed [`OUTPUT_SCHEMA`].
//!
//! Every record produces exactly one [`NormalizedRow`]. A schema column the
//! record does not carry becomes [`NOT_AVAILABLE`]; this substitution is the
//! only error absorption at this layer and is never reported as a failure.
//!
//! Column lookup is exact-match. A source that spells a column differently
//! (`call_start`, `cost`, `Cost `) yields `N/A` for that column.

use crate::types::{
    NormalizedRow, RawRecord, RawTable, ResultTable, NOT_AVAILABLE, OUTPUT_SCHEMA,
};
use serde_json::Value;

/// Normalise a loaded table into a [`ResultTable`].
///
/// `None` is the caller's signal that loading failed and yields
/// [`ResultTable::NoData`]. Any `Some` table, including an empty one, yields
/// the header row followed by one row per record in input order.
pub fn normalize(table: Option<&RawTable>) -> ResultTable {
    let Some(table) = table else {
        tracing::debug!("normalize: no input table, emitting no-data result");
        return ResultTable::NoData;
    };

    let rows: Vec<NormalizedRow> = table.iter().map(normalize_record).collect();
    tracing::debug!(records = rows.len(), "normalize: table aligned to output schema");
    ResultTable::Data(rows)
}

/// Align a single record to the output schema.
pub fn normalize_record(record: &RawRecord) -> NormalizedRow {
    NormalizedRow::new(OUTPUT_SCHEMA.map(|column| field_value(record, column)))
}

/// Total lookup: the display form of `record[column]`, or `"N/A"` when absent.
pub fn field_value(record: &RawRecord, column: &str) -> String {
    record
        .get(column)
        .map(display_value)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Natural string form of a raw value.
///
/// Strings are copied verbatim (no quotes); every other JSON value is written
/// as compact JSON text, e.g. `1`, `0.5`, `true`, `null`, `[1,2]`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
