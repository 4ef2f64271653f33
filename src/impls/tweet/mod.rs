//! Disaster tweet corpus, CSV-formatted.
//!
//! One tweet per row. The raw corpus carries at least `keyword`, `text` and
//! `target` columns; extra columns (`id`, `location`, ...) are tolerated and
//! ignored, fields are addressed through the header.
mod filter;
mod normalize;

use crate::error::Error;

/// Disaster tweet corpus in CSV form.
pub struct TweetCsv;

/// Resolves a column name to its index in the header.
fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(Error::Schema { column: name })
}

/// Fetches a required, non-empty field from a data row.
/// `row` is 1-based and excludes the header.
fn field<'a>(
    record: &'a csv::StringRecord,
    idx: usize,
    row: usize,
    name: &'static str,
) -> Result<&'a str, Error> {
    match record.get(idx) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MalformedInput { row, field: name }),
    }
}
