//! Combiner: concatenate the per-platform tables into one campaign table.

use crate::domain::{AdRecord, Platform};

/// Concatenate all platform tables, preserving every row, then sort
/// ascending by date. The sort is stable, so rows sharing a date keep
/// their input order (platforms in ingest order, rows in file order).
pub fn combine_platforms(tables: Vec<(Platform, Vec<AdRecord>)>) -> Vec<AdRecord> {
    let mut combined: Vec<AdRecord> = tables.into_iter().flat_map(|(_, rows)| rows).collect();
    combined.sort_by_key(|r| r.date);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, platform: Platform, campaign: &str) -> AdRecord {
        AdRecord {
            date: date.parse::<NaiveDate>().unwrap(),
            platform,
            state: "CA".into(),
            campaign: campaign.into(),
            impressions: 1000,
            clicks: 10,
            spend: 50.0,
            attributed_revenue: 75.0,
            ctr: 1.0,
            cpc: 5.0,
            roas: 1.5,
            cpm: 50.0,
        }
    }

    #[test]
    fn sorts_by_date_across_platforms() {
        let combined = combine_platforms(vec![
            (
                Platform::Facebook,
                vec![record("2024-01-03", Platform::Facebook, "a")],
            ),
            (
                Platform::Google,
                vec![record("2024-01-01", Platform::Google, "b")],
            ),
            (
                Platform::TikTok,
                vec![record("2024-01-02", Platform::TikTok, "c")],
            ),
        ]);

        let dates: Vec<_> = combined.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn ties_preserve_input_order() {
        let combined = combine_platforms(vec![
            (
                Platform::Facebook,
                vec![
                    record("2024-01-01", Platform::Facebook, "fb-1"),
                    record("2024-01-01", Platform::Facebook, "fb-2"),
                ],
            ),
            (
                Platform::Google,
                vec![record("2024-01-01", Platform::Google, "goog-1")],
            ),
        ]);

        let campaigns: Vec<_> = combined.iter().map(|r| r.campaign.as_str()).collect();
        assert_eq!(campaigns, ["fb-1", "fb-2", "goog-1"]);
    }

    #[test]
    fn no_cross_platform_dedup() {
        // Identical rows from different platforms both survive
        let combined = combine_platforms(vec![
            (
                Platform::Facebook,
                vec![record("2024-01-01", Platform::Facebook, "same")],
            ),
            (
                Platform::Google,
                vec![record("2024-01-01", Platform::Google, "same")],
            ),
        ]);
        assert_eq!(combined.len(), 2);
    }
}
