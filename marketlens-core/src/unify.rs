//! Unifier: daily ad aggregation outer-joined with the business ledger.

use crate::domain::{AdRecord, BusinessRecord, UnifiedDailyRecord};
use crate::metrics;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Advertising totals for one calendar date, summed across platforms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyAdTotals {
    pub spend: f64,
    pub attributed_revenue: f64,
    pub clicks: u64,
    pub impressions: u64,
}

/// Group the combined campaign table by date and sum its volume columns.
///
/// BTreeMap keeps the result date-ordered, which makes the unified table
/// deterministic run to run.
pub fn aggregate_daily(combined: &[AdRecord]) -> BTreeMap<NaiveDate, DailyAdTotals> {
    let mut daily: BTreeMap<NaiveDate, DailyAdTotals> = BTreeMap::new();
    for record in combined {
        let totals = daily.entry(record.date).or_default();
        totals.spend += record.spend;
        totals.attributed_revenue += record.attributed_revenue;
        totals.clicks += record.clicks;
        totals.impressions += record.impressions;
    }
    daily
}

/// Full outer join of the business ledger against the daily ad totals.
///
/// The output holds one record per date in either input, sorted ascending.
/// Fields absent on one side are 0.
pub fn unify(business: &[BusinessRecord], combined: &[AdRecord]) -> Vec<UnifiedDailyRecord> {
    let daily = aggregate_daily(combined);
    let ledger: BTreeMap<NaiveDate, &BusinessRecord> =
        business.iter().map(|r| (r.date, r)).collect();

    let mut dates: Vec<NaiveDate> = ledger.keys().chain(daily.keys()).copied().collect();
    dates.sort_unstable();
    dates.dedup();

    dates
        .into_iter()
        .map(|date| {
            let mut record = UnifiedDailyRecord::zeroed(date);

            if let Some(b) = ledger.get(&date) {
                record.total_revenue = b.total_revenue;
                record.gross_profit = b.gross_profit;
                record.cost_of_goods_sold = b.cost_of_goods_sold;
                record.num_of_orders = b.num_of_orders;
                record.new_customers = b.new_customers;
                record.profit_margin = b.profit_margin;
                record.avg_order_value = b.avg_order_value;
            }

            if let Some(t) = daily.get(&date) {
                record.spend = t.spend;
                record.attributed_revenue = t.attributed_revenue;
                record.clicks = t.clicks;
                record.impressions = t.impressions;
                record.daily_roas = metrics::roas(t.attributed_revenue, t.spend);
                record.daily_ctr = metrics::ctr(t.clicks, t.impressions);
            }

            record.marketing_efficiency =
                metrics::marketing_efficiency(record.total_revenue, record.spend);
            record
        })
        .collect()
}
