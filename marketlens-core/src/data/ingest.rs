//! CSV ingest: raw body → rows plus a normalized column map.
//!
//! Column identifiers are normalized once at table construction (`#` →
//! `num`, spaces → `_`), so every downstream lookup uses stable field
//! names regardless of how a source labels its columns. A column that is
//! absent simply resolves to nothing — cell accessors return 0 / empty /
//! no-date, which is the SchemaDrift policy.

use super::provider::{DataError, SourceSpec};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Normalize one column identifier: strip the `#` marker to `num`, then
/// replace internal spaces with underscores.
///
/// `# of orders` → `num_of_orders`, `attributed revenue` →
/// `attributed_revenue`, `COGS` → `COGS`.
pub fn normalize_column(name: &str) -> String {
    name.trim().replace('#', "num").replace(' ', "_")
}

/// Maps normalized column names to positions in the raw records.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: HashMap<String, usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let indices = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (normalize_column(h), i))
            .collect();
        Self { indices }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }
}

/// A parsed but uncleaned table: the normalized column map plus raw rows.
#[derive(Debug, Clone)]
pub struct RawTable {
    columns: ColumnMap,
    rows: Vec<csv::StringRecord>,
}

/// Date formats accepted by the cleaner, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

impl RawTable {
    /// Parse a CSV body fetched from `source`.
    ///
    /// Fails only on structurally malformed CSV; bad cell values are the
    /// cleaner's problem, not the parser's.
    pub fn parse(source: &SourceSpec, body: &str) -> Result<RawTable, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| DataError::Csv {
                table: source.kind.label().to_string(),
                reason: e.to_string(),
            })?
            .clone();
        let columns = ColumnMap::from_headers(&headers);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| DataError::Csv {
                table: source.kind.label().to_string(),
                reason: e.to_string(),
            })?;
            rows.push(record);
        }

        Ok(RawTable { columns, rows })
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over row indices.
    pub fn row_indices(&self) -> std::ops::Range<usize> {
        0..self.rows.len()
    }

    fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = *self.columns.indices.get(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Text cell; empty string when the column or value is absent.
    pub fn text(&self, row: usize, column: &str) -> String {
        self.cell(row, column).unwrap_or("").trim().to_string()
    }

    /// Numeric cell coerced to f64; unparseable or absent values become 0.
    pub fn numeric(&self, row: usize, column: &str) -> f64 {
        self.cell(row, column)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    /// Count cell coerced to u64; unparseable, negative, or absent values
    /// become 0. Accepts values written with a decimal point (`40.0`).
    pub fn count(&self, row: usize, column: &str) -> u64 {
        let v = self.numeric(row, column);
        if v.is_finite() && v > 0.0 {
            v.round() as u64
        } else {
            0
        }
    }

    /// Calendar-date cell; `None` when the value fails every accepted
    /// format (the cleaner excludes such records).
    pub fn date(&self, row: usize, column: &str) -> Option<NaiveDate> {
        let raw = self.cell(row, column)?.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }
}
