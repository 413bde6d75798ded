//! Test builders — ergonomic constructors for raw CDR records and tables.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use cdrview::{RawRecord, RawTable, OUTPUT_SCHEMA};
use fake::faker::address::en::CountryName;
use fake::faker::company::en::CompanyName;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;

// ---------------------------------------------------------------------------
// RawRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RawRecordBuilder::new()
///     .field("Caller Number", "555-1234")
///     .field("Cost", 0.5)
///     .build();
/// ```
#[derive(Default)]
pub struct RawRecordBuilder {
    record: RawRecord,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record carrying every schema column, each set to its own name.
    pub fn full_schema() -> Self {
        OUTPUT_SCHEMA
            .iter()
            .fold(Self::new(), |b, column| b.field(*column, *column))
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.record.insert(key, value);
        self
    }

    pub fn build(self) -> RawRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Realistic generated records
// ---------------------------------------------------------------------------

/// A plausible CDR with every schema column, generated with `fake`.
pub fn fake_call() -> RawRecord {
    let start_min: u32 = (0..1440u32).fake();
    let duration: u32 = (0..7200u32).fake();
    let end_min = (start_min + duration / 60) % 1440;
    let status = if duration == 0 { "Missed" } else { "Completed" };

    RawRecordBuilder::new()
        .field(
            "Call Start Time",
            format!("2024-01-15 {:02}:{:02}:00", start_min / 60, start_min % 60),
        )
        .field(
            "Call End Time",
            format!("2024-01-15 {:02}:{:02}:00", end_min / 60, end_min % 60),
        )
        .field("Duration", duration.to_string())
        .field("Caller Number", PhoneNumber().fake::<String>())
        .field("Receiver Number", PhoneNumber().fake::<String>())
        .field("Call Type", if duration % 3 == 0 { "International" } else { "Voice" })
        .field("Country", CountryName().fake::<String>())
        .field("Tower ID", format!("TWR-{:03}", (1..999u32).fake::<u32>()))
        .field("ISP Name", CompanyName().fake::<String>())
        .field("Cost", format!("{:.2}", duration as f64 * 0.0125))
        .field("Call Status", status)
        .build()
}

/// `n` generated calls.
pub fn fake_calls(n: usize) -> RawTable {
    (0..n).map(|_| fake_call()).collect()
}

/// Render `table` as CSV with the schema as header, quoting every cell.
pub fn to_csv(table: &RawTable) -> String {
    let quote = |s: &str| format!("\"{}\"", s.replace('"', "\"\""));
    let mut out = OUTPUT_SCHEMA.iter().map(|c| quote(c)).collect::<Vec<_>>().join(",");
    for record in table {
        out.push('\n');
        let cells: Vec<String> = OUTPUT_SCHEMA
            .iter()
            .map(|c| quote(record.get(c).and_then(|v| v.as_str()).unwrap_or("")))
            .collect();
        out.push_str(&cells.join(","));
    }
    out
}
