//! JSON loader (`.json`).
//!
//! The whole file is a single JSON value which must be an array of objects.
//! Each object becomes one record with its values kept as JSON; nested values
//! are stored as opaque [`Value`]s, not flattened.

use anyhow::{anyhow, bail, Context};
use cdrview_core::{RawRecord, RawTable};
use serde_json::Value;

/// Parse `text` into a [`RawTable`].
pub fn parse(text: &str) -> anyhow::Result<RawTable> {
    let value: Value = serde_json::from_str(text).context("invalid JSON")?;

    let items = match value {
        Value::Array(items) => items,
        other => bail!("expected a top-level array of records, found {}", kind(&other)),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map.into_iter().collect::<RawRecord>()),
            other => Err(anyhow!("element {index} is {}, expected an object", kind(&other))),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
