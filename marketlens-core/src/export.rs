//! CSV download of the current view.
//!
//! Serializes the combined-campaign table and the business ledger to
//! comma-separated text with a header row and ISO-8601 dates — the same
//! structure the loader ingests, so an export re-parses cleanly.

use crate::data::provider::DataError;
use crate::domain::{AdRecord, BusinessRecord, Platform};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// The dashboard's filter state applied to a table before download.
///
/// Empty platform/state sets mean "all"; open-ended date bounds mean
/// unbounded.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub platforms: HashSet<Platform>,
    pub states: HashSet<String>,
}

impl ViewFilter {
    fn date_in_range(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }

    pub fn matches_ad(&self, record: &AdRecord) -> bool {
        self.date_in_range(record.date)
            && (self.platforms.is_empty() || self.platforms.contains(&record.platform))
            && (self.states.is_empty() || self.states.contains(&record.state))
    }

    pub fn matches_business(&self, record: &BusinessRecord) -> bool {
        self.date_in_range(record.date)
    }
}

fn to_csv<T: Serialize>(rows: impl Iterator<Item = T>) -> Result<String, DataError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| DataError::Export(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| DataError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DataError::Export(e.to_string()))
}

/// Serialize the filtered combined-campaign table.
pub fn combined_csv(records: &[AdRecord], filter: &ViewFilter) -> Result<String, DataError> {
    to_csv(records.iter().filter(|r| filter.matches_ad(r)))
}

/// Serialize the filtered business ledger.
pub fn business_csv(records: &[BusinessRecord], filter: &ViewFilter) -> Result<String, DataError> {
    to_csv(records.iter().filter(|r| filter.matches_business(r)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn ad(date: &str, platform: Platform, state: &str) -> AdRecord {
        AdRecord {
            date: d(date),
            platform,
            state: state.into(),
            campaign: "brand".into(),
            impressions: 2000,
            clicks: 40,
            spend: 100.0,
            attributed_revenue: 150.0,
            ctr: 2.0,
            cpc: 2.5,
            roas: 1.5,
            cpm: 50.0,
        }
    }

    #[test]
    fn export_has_header_and_iso_dates() {
        let csv = combined_csv(&[ad("2024-01-01", Platform::Facebook, "CA")], &ViewFilter::default())
            .unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,platform,state,campaign,impression,clicks,spend,attributed_revenue,ctr,cpc,roas,cpm"
        );
        assert!(lines.next().unwrap().starts_with("2024-01-01,Facebook,CA,"));
    }

    #[test]
    fn filters_restrict_rows() {
        let records = vec![
            ad("2024-01-01", Platform::Facebook, "CA"),
            ad("2024-01-02", Platform::Google, "NY"),
            ad("2024-01-03", Platform::Google, "CA"),
        ];

        let filter = ViewFilter {
            start: Some(d("2024-01-02")),
            end: None,
            platforms: [Platform::Google].into_iter().collect(),
            states: ["CA".to_string()].into_iter().collect(),
        };
        let csv = combined_csv(&records, &filter).unwrap();
        let rows: Vec<_> = csv.lines().skip(1).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("2024-01-03,Google,CA,"));
    }

    #[test]
    fn business_export_roundtrips_through_the_cleaner() {
        use crate::clean::clean_business;
        use crate::data::provider::{SourceKind, SourceSpec};
        use crate::data::RawTable;

        let original = vec![BusinessRecord {
            date: d("2024-01-01"),
            total_revenue: 1000.0,
            gross_profit: 400.0,
            cost_of_goods_sold: 600.0,
            num_of_orders: 10,
            new_customers: 3,
            profit_margin: metrics::profit_margin(400.0, 1000.0),
            avg_order_value: metrics::avg_order_value(1000.0, 10),
        }];

        let csv = business_csv(&original, &ViewFilter::default()).unwrap();
        let spec = SourceSpec {
            kind: SourceKind::Business,
            url: "test://roundtrip".into(),
        };
        let reparsed = clean_business(&RawTable::parse(&spec, &csv).unwrap());
        assert_eq!(reparsed, original);
    }
}
