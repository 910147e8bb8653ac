//! UnifiedDailyRecord — business and advertising joined on date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row per calendar date present in either the business ledger or the
/// aggregated advertising table (full outer join).
///
/// Fields absent on one side of the join are 0, never missing: a date with
/// ad spend but no ledger entry carries zeroed business fields, and vice
/// versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedDailyRecord {
    pub date: NaiveDate,

    // Business side
    pub total_revenue: f64,
    pub gross_profit: f64,
    pub cost_of_goods_sold: f64,
    pub num_of_orders: u64,
    pub new_customers: u64,
    pub profit_margin: f64,
    pub avg_order_value: f64,

    // Advertising side, summed across platforms for the day
    pub spend: f64,
    pub attributed_revenue: f64,
    pub clicks: u64,
    pub impressions: u64,
    pub daily_roas: f64,
    pub daily_ctr: f64,

    /// total_revenue / spend, 0 when the day had no spend.
    pub marketing_efficiency: f64,
}

impl UnifiedDailyRecord {
    /// A fully zeroed record for a date, used as the fill value on the
    /// sparse side of the outer join.
    pub fn zeroed(date: NaiveDate) -> Self {
        Self {
            date,
            total_revenue: 0.0,
            gross_profit: 0.0,
            cost_of_goods_sold: 0.0,
            num_of_orders: 0,
            new_customers: 0,
            profit_margin: 0.0,
            avg_order_value: 0.0,
            spend: 0.0,
            attributed_revenue: 0.0,
            clicks: 0,
            impressions: 0,
            daily_roas: 0.0,
            daily_ctr: 0.0,
            marketing_efficiency: 0.0,
        }
    }
}
