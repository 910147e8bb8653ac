//! BusinessRecord — one row of the sales ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily business performance after cleaning.
///
/// At most one record exists per date (the cleaner de-duplicates, keeping
/// the first occurrence in input order). `profit_margin` and
/// `avg_order_value` are derived with the shared zero-guarded rounding
/// rule in `metrics`.
///
/// Serde field renames match the normalized CSV column names, so a record
/// serialized with the `csv` crate is re-ingestable by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub date: NaiveDate,
    pub total_revenue: f64,
    pub gross_profit: f64,
    #[serde(rename = "COGS")]
    pub cost_of_goods_sold: f64,
    pub num_of_orders: u64,
    pub new_customers: u64,
    pub profit_margin: f64,
    pub avg_order_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_header_uses_normalized_column_names() {
        let record = BusinessRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            total_revenue: 1000.0,
            gross_profit: 400.0,
            cost_of_goods_sold: 600.0,
            num_of_orders: 10,
            new_customers: 3,
            profit_margin: 40.0,
            avg_order_value: 100.0,
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&record).unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let header = out.lines().next().unwrap();
        assert_eq!(
            header,
            "date,total_revenue,gross_profit,COGS,num_of_orders,new_customers,profit_margin,avg_order_value"
        );
        assert!(out.lines().nth(1).unwrap().starts_with("2024-01-01,"));
    }
}
