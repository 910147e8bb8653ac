//! Cleaning: raw tables → typed records with derived metrics.
//!
//! Rules applied here, in order:
//! - a record whose date cell fails to parse is excluded (the table
//!   survives; a missing date column cleans the table to empty);
//! - numeric cells that will not coerce read as 0 (done in ingest);
//! - business records are de-duplicated by date, keeping the first
//!   occurrence in input order;
//! - ad records with zero impressions are dropped as invalid.
//!
//! Derived ratio columns are filled in here so records leave the cleaner
//! complete.

use crate::data::RawTable;
use crate::domain::{AdRecord, BusinessRecord, Platform};
use crate::metrics;
use std::collections::BTreeSet;

/// Clean the business ledger.
pub fn clean_business(table: &RawTable) -> Vec<BusinessRecord> {
    let mut seen_dates = BTreeSet::new();
    let mut records = Vec::with_capacity(table.len());

    for row in table.row_indices() {
        let Some(date) = table.date(row, "date") else {
            continue;
        };
        // Keep the first record for each date
        if !seen_dates.insert(date) {
            continue;
        }

        let total_revenue = table.numeric(row, "total_revenue");
        let gross_profit = table.numeric(row, "gross_profit");
        let num_of_orders = table.count(row, "num_of_orders");

        records.push(BusinessRecord {
            date,
            total_revenue,
            gross_profit,
            cost_of_goods_sold: table.numeric(row, "COGS"),
            num_of_orders,
            new_customers: table.count(row, "new_customers"),
            profit_margin: metrics::profit_margin(gross_profit, total_revenue),
            avg_order_value: metrics::avg_order_value(total_revenue, num_of_orders),
        });
    }

    records
}

/// Clean one platform's campaign report, tagging every row with its
/// originating platform.
pub fn clean_platform(table: &RawTable, platform: Platform) -> Vec<AdRecord> {
    let mut records = Vec::with_capacity(table.len());

    for row in table.row_indices() {
        let Some(date) = table.date(row, "date") else {
            continue;
        };

        let impressions = table.count(row, "impression");
        // Zero impressions marks invalid data; the row carries no signal
        if impressions == 0 {
            continue;
        }

        let clicks = table.count(row, "clicks");
        let spend = table.numeric(row, "spend");
        let attributed_revenue = table.numeric(row, "attributed_revenue");

        records.push(AdRecord {
            date,
            platform,
            state: table.text(row, "state"),
            campaign: table.text(row, "campaign"),
            impressions,
            clicks,
            spend,
            attributed_revenue,
            ctr: metrics::ctr(clicks, impressions),
            cpc: metrics::cpc(spend, clicks),
            roas: metrics::roas(attributed_revenue, spend),
            cpm: metrics::cpm(spend, impressions),
        });
    }

    records
}
