//! Domain-specific assertion macros for cdrview harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which table invariant was violated.

// ---------------------------------------------------------------------------
// Table shape
// ---------------------------------------------------------------------------

/// Assert that a `ResultTable` is the single-row "no data" table.
#[macro_export]
macro_rules! assert_no_data {
    ($table:expr) => {{
        let table: &cdrview::ResultTable = &$table;
        pretty_assertions::assert_eq!(
            table.rows(),
            vec![vec![cdrview::NO_DATA_MARKER]],
            "assert_no_data! failed: table is not the no-data table"
        );
    }};
}

/// Assert that a `ResultTable` is a header followed by `n` records, each
/// exactly as wide as the schema.
#[macro_export]
macro_rules! assert_table_shape {
    ($table:expr, $n:expr) => {{
        let table: &cdrview::ResultTable = &$table;
        let n: usize = $n;
        let rows = table.rows();
        assert_eq!(
            rows.len(),
            n + 1,
            "assert_table_shape! failed: expected header + {} records, got {} rows",
            n,
            rows.len()
        );
        pretty_assertions::assert_eq!(rows[0], cdrview::OUTPUT_SCHEMA.to_vec());
        for (i, row) in rows.iter().enumerate().skip(1) {
            assert_eq!(
                row.len(),
                cdrview::COLUMN_COUNT,
                "assert_table_shape! failed: row {} has {} cells",
                i,
                row.len()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Cell assertions
// ---------------------------------------------------------------------------

/// Assert the value of one named column in data record `index` (0-based).
///
/// ```rust
/// assert_cell!(table, 0, "Cost", "0.50");
/// ```
#[macro_export]
macro_rules! assert_cell {
    ($table:expr, $index:expr, $column:expr, $value:expr) => {{
        let table: &cdrview::ResultTable = &$table;
        let index: usize = $index;
        let column: &str = $column;
        let record = table.records().get(index).unwrap_or_else(|| {
            panic!(
                "assert_cell! failed: no record {} (table has {})",
                index,
                table.records().len()
            )
        });
        pretty_assertions::assert_eq!(
            record.get(column),
            Some($value),
            "assert_cell! failed at record {} column {:?}",
            index,
            column
        );
    }};
}

/// Assert that every column except `$populated` is `N/A` in record `index`.
#[macro_export]
macro_rules! assert_only_populated {
    ($table:expr, $index:expr, [$($populated:expr),* $(,)?]) => {{
        let table: &cdrview::ResultTable = &$table;
        let populated: &[&str] = &[$($populated),*];
        let record = &table.records()[$index];
        for column in cdrview::OUTPUT_SCHEMA {
            let value = record.get(column).unwrap_or_default();
            if populated.contains(&column) {
                assert_ne!(
                    value,
                    cdrview::NOT_AVAILABLE,
                    "assert_only_populated! failed: {:?} should be populated",
                    column
                );
            } else {
                assert_eq!(
                    value,
                    cdrview::NOT_AVAILABLE,
                    "assert_only_populated! failed: {:?} should be N/A",
                    column
                );
            }
        }
    }};
}
