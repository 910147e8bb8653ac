//! AdRecord — one row of a platform campaign report.

use super::Platform;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One campaign-level advertising observation after cleaning.
///
/// Invariant: `impressions > 0`. Rows with zero impressions are dropped by
/// the cleaner as invalid data, so every ratio with impressions in the
/// denominator is well-defined (the zero-guard still applies to `cpc` and
/// `roas`, whose denominators can legitimately be 0).
///
/// The `impression` serde rename mirrors the singular column name used by
/// the upstream platform exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRecord {
    pub date: NaiveDate,
    pub platform: Platform,
    pub state: String,
    pub campaign: String,
    #[serde(rename = "impression")]
    pub impressions: u64,
    pub clicks: u64,
    pub spend: f64,
    pub attributed_revenue: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub cpm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_row_serializes_platform_and_date_as_text() {
        let record = AdRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            platform: Platform::Facebook,
            state: "CA".into(),
            campaign: "brand-awareness".into(),
            impressions: 2000,
            clicks: 40,
            spend: 100.0,
            attributed_revenue: 150.0,
            ctr: 2.0,
            cpc: 2.5,
            roas: 1.5,
            cpm: 50.0,
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&record).unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("date,platform,state,campaign,impression,clicks,"));
        assert!(out.contains("2024-01-01,Facebook,CA,brand-awareness,2000,40,"));
    }
}
