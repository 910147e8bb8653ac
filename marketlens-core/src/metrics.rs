//! Derived marketing ratios with a uniform zero-guard and rounding rule.
//!
//! Every ratio in the system goes through [`guarded_div`]: a denominator
//! that is not strictly positive yields 0 (never NaN/inf/error), and the
//! quotient is rounded to 2 decimal places, half away from zero. Guard
//! first, then round.

/// Round to 2 decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// `num / den` rounded to 2 decimals, or 0 unless `den > 0`.
///
/// Denominators here are volumes and spend; a negative value is corrupt
/// data and gets the same treatment as zero.
pub fn guarded_div(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        round2(num / den)
    } else {
        0.0
    }
}

/// Click-through rate: clicks / impressions x 100.
pub fn ctr(clicks: u64, impressions: u64) -> f64 {
    guarded_div(clicks as f64 * 100.0, impressions as f64)
}

/// Cost per click: spend / clicks.
pub fn cpc(spend: f64, clicks: u64) -> f64 {
    guarded_div(spend, clicks as f64)
}

/// Return on ad spend: attributed revenue / spend.
pub fn roas(attributed_revenue: f64, spend: f64) -> f64 {
    guarded_div(attributed_revenue, spend)
}

/// Cost per thousand impressions: spend / impressions x 1000.
pub fn cpm(spend: f64, impressions: u64) -> f64 {
    guarded_div(spend * 1000.0, impressions as f64)
}

/// Profit margin percentage: gross profit / total revenue x 100.
pub fn profit_margin(gross_profit: f64, total_revenue: f64) -> f64 {
    guarded_div(gross_profit * 100.0, total_revenue)
}

/// Average order value: total revenue / number of orders.
pub fn avg_order_value(total_revenue: f64, num_of_orders: u64) -> f64 {
    guarded_div(total_revenue, num_of_orders as f64)
}

/// Revenue generated per unit of ad spend for a day.
pub fn marketing_efficiency(total_revenue: f64, spend: f64) -> f64 {
    guarded_div(total_revenue, spend)
}
