//! Core types for cdrview-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! format-agnostic [`RawRecord`] / [`RawTable`] produced by the loaders, the
//! fixed [`OUTPUT_SCHEMA`], and the normalised [`NormalizedRow`] /
//! [`ResultTable`] handed to the presentation layer and the exporter.

use serde_json::Value;
use std::ops::Index;

// ---------------------------------------------------------------------------
// Output schema
// ---------------------------------------------------------------------------

/// Number of columns in every normalised row.
pub const COLUMN_COUNT: usize = 11;

/// The fixed, ordered output schema. Every [`NormalizedRow`] is aligned
/// positionally to these names.
pub const OUTPUT_SCHEMA: [&str; COLUMN_COUNT] = [
    "Call Start Time",
    "Call End Time",
    "Duration",
    "Caller Number",
    "Receiver Number",
    "Call Type",
    "Country",
    "Tower ID",
    "ISP Name",
    "Cost",
    "Call Status",
];

/// Placeholder written into a slot whose column is absent from the source record.
pub const NOT_AVAILABLE: &str = "N/A";

/// The single cell of the result table produced when loading failed.
pub const NO_DATA_MARKER: &str = "No data to analyze";

/// Position of `column` in [`OUTPUT_SCHEMA`], if it is a schema column.
pub fn column_index(column: &str) -> Option<usize> {
    OUTPUT_SCHEMA.iter().position(|c| *c == column)
}

// ---------------------------------------------------------------------------
// RawRecord
// ---------------------------------------------------------------------------

/// One input record as parsed from a source file: field name → value.
///
/// Field order is insertion order. Delimited-text and XML loaders only ever
/// produce [`Value::String`]; the JSON loader keeps the original JSON types.
/// Records are small (tens of fields), so lookup is a plain ordered scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, Value)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. An existing field with the same name is overwritten in
    /// place, keeping its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Exact-match lookup. No case folding, no trimming.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

// ---------------------------------------------------------------------------
// RawTable
// ---------------------------------------------------------------------------

/// Ordered sequence of [`RawRecord`]s in source order (row order for
/// delimited text, array order for JSON, document order for XML).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    records: Vec<RawRecord>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RawRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawRecord> {
        self.records.iter()
    }
}

impl From<Vec<RawRecord>> for RawTable {
    fn from(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<RawRecord> for RawTable {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl IntoIterator for RawTable {
    type Item = RawRecord;
    type IntoIter = std::vec::IntoIter<RawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RawTable {
    type Item = &'a RawRecord;
    type IntoIter = std::slice::Iter<'a, RawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// NormalizedRow
// ---------------------------------------------------------------------------

/// One record aligned to [`OUTPUT_SCHEMA`]. The length is fixed by the type,
/// so a row can never be shorter than the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedRow([String; COLUMN_COUNT]);

impl NormalizedRow {
    pub fn new(values: [String; COLUMN_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[String; COLUMN_COUNT] {
        &self.0
    }

    /// Value for a schema column by name, or `None` if `column` is not in the schema.
    pub fn get(&self, column: &str) -> Option<&str> {
        column_index(column).map(|i| self.0[i].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Index<usize> for NormalizedRow {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

// ---------------------------------------------------------------------------
// ResultTable
// ---------------------------------------------------------------------------

/// The output of one load-and-normalise operation.
///
/// Viewed as rows, a [`ResultTable::Data`] is the header row (the schema
/// names) followed by one row per record; a [`ResultTable::NoData`] is a single
/// one-cell row holding [`NO_DATA_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultTable {
    /// The input could not be loaded.
    NoData,
    /// Loaded successfully; possibly zero records.
    Data(Vec<NormalizedRow>),
}

impl ResultTable {
    pub fn no_data() -> Self {
        ResultTable::NoData
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ResultTable::NoData)
    }

    /// The header row, present unless this is the no-data table.
    pub fn header(&self) -> Option<&'static [&'static str; COLUMN_COUNT]> {
        match self {
            ResultTable::NoData => None,
            ResultTable::Data(_) => Some(&OUTPUT_SCHEMA),
        }
    }

    /// Normalised data rows (empty for the no-data table).
    pub fn records(&self) -> &[NormalizedRow] {
        match self {
            ResultTable::NoData => &[],
            ResultTable::Data(rows) => rows,
        }
    }

    /// Total number of rows including the header (or the marker row).
    pub fn row_count(&self) -> usize {
        match self {
            ResultTable::NoData => 1,
            ResultTable::Data(rows) => rows.len() + 1,
        }
    }

    /// Every row as string cells, header (or marker) first.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        match self {
            ResultTable::NoData => vec![vec![NO_DATA_MARKER]],
            ResultTable::Data(rows) => {
                let mut out: Vec<Vec<&str>> = Vec::with_capacity(rows.len() + 1);
                out.push(OUTPUT_SCHEMA.to_vec());
                out.extend(rows.iter().map(|r| r.iter().collect::<Vec<_>>()));
                out
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
