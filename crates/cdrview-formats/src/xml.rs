//! XML loader (`.xml`).
//!
//! Each direct element child of the root element is one record, built from
//! that element's attributes only. Text, nested elements, comments and
//! processing instructions are ignored. An element without attributes is an
//! empty record.

use anyhow::Context;
use cdrview_core::{RawRecord, RawTable};

/// Parse `text` into a [`RawTable`].
pub fn parse(text: &str) -> anyhow::Result<RawTable> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options)
        .context("malformed XML document")?;

    let table = doc
        .root_element()
        .children()
        .filter(|node| node.is_element())
        .map(|element| {
            element
                .attributes()
                .map(|attr| (attr.name(), attr.value()))
                .collect::<RawRecord>()
        })
        .collect();

    Ok(table)
}
