//! Data-quality summary for a cleaned table.
//!
//! Informational only: row count, date coverage, and negative-value counts
//! for the money columns. The CLI prints one report per table after a run;
//! nothing here can fail a pipeline.

use crate::domain::{AdRecord, BusinessRecord};
use chrono::NaiveDate;
use std::fmt;

/// Summary statistics for one cleaned table.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    pub table: String,
    pub rows: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// (column, count) pairs for columns containing negative values.
    pub negative_values: Vec<(&'static str, usize)>,
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} rows", self.table, self.rows)?;
        if let Some((start, end)) = self.date_range {
            write!(f, ", {start} to {end}")?;
        }
        for (column, count) in &self.negative_values {
            write!(f, "; WARNING {count} negative values in {column}")?;
        }
        Ok(())
    }
}

fn date_range<'a>(dates: impl Iterator<Item = &'a NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    let mut range: Option<(NaiveDate, NaiveDate)> = None;
    for &date in dates {
        range = Some(match range {
            None => (date, date),
            Some((lo, hi)) => (lo.min(date), hi.max(date)),
        });
    }
    range
}

fn negatives(pairs: Vec<(&'static str, usize)>) -> Vec<(&'static str, usize)> {
    pairs.into_iter().filter(|(_, n)| *n > 0).collect()
}

/// Report on the cleaned business ledger.
pub fn business_report(records: &[BusinessRecord]) -> QualityReport {
    QualityReport {
        table: "business".into(),
        rows: records.len(),
        date_range: date_range(records.iter().map(|r| &r.date)),
        negative_values: negatives(vec![
            (
                "total_revenue",
                records.iter().filter(|r| r.total_revenue < 0.0).count(),
            ),
            (
                "gross_profit",
                records.iter().filter(|r| r.gross_profit < 0.0).count(),
            ),
            (
                "COGS",
                records
                    .iter()
                    .filter(|r| r.cost_of_goods_sold < 0.0)
                    .count(),
            ),
        ]),
    }
}

/// Report on a cleaned campaign table.
pub fn combined_report(table: &str, records: &[AdRecord]) -> QualityReport {
    QualityReport {
        table: table.into(),
        rows: records.len(),
        date_range: date_range(records.iter().map(|r| &r.date)),
        negative_values: negatives(vec![
            ("spend", records.iter().filter(|r| r.spend < 0.0).count()),
            (
                "attributed_revenue",
                records
                    .iter()
                    .filter(|r| r.attributed_revenue < 0.0)
                    .count(),
            ),
        ]),
    }
}
