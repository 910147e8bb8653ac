//! DataFrame views of the pipeline output.
//!
//! The presentation layer (charts, summary widgets) consumes Polars
//! DataFrames keyed by the same field names as the domain records. Dates
//! are materialized as proper `Date`-typed columns (days since epoch, cast),
//! so temporal grouping works downstream without re-parsing strings.

use crate::data::provider::DataError;
use crate::domain::{AdRecord, BusinessRecord, UnifiedDailyRecord};
use chrono::NaiveDate;
use polars::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

fn date_column(name: &str, dates: Vec<i32>) -> Result<Column, DataError> {
    Column::new(name.into(), dates)
        .cast(&DataType::Date)
        .map_err(|e| DataError::Frame(format!("date cast: {e}")))
}

/// Business ledger as a DataFrame.
pub fn business_frame(records: &[BusinessRecord]) -> Result<DataFrame, DataError> {
    let dates: Vec<i32> = records
        .iter()
        .map(|r| (r.date - epoch()).num_days() as i32)
        .collect();

    DataFrame::new(vec![
        date_column("date", dates)?,
        Column::new(
            "total_revenue".into(),
            records.iter().map(|r| r.total_revenue).collect::<Vec<f64>>(),
        ),
        Column::new(
            "gross_profit".into(),
            records.iter().map(|r| r.gross_profit).collect::<Vec<f64>>(),
        ),
        Column::new(
            "COGS".into(),
            records
                .iter()
                .map(|r| r.cost_of_goods_sold)
                .collect::<Vec<f64>>(),
        ),
        Column::new(
            "num_of_orders".into(),
            records.iter().map(|r| r.num_of_orders).collect::<Vec<u64>>(),
        ),
        Column::new(
            "new_customers".into(),
            records.iter().map(|r| r.new_customers).collect::<Vec<u64>>(),
        ),
        Column::new(
            "profit_margin".into(),
            records.iter().map(|r| r.profit_margin).collect::<Vec<f64>>(),
        ),
        Column::new(
            "avg_order_value".into(),
            records
                .iter()
                .map(|r| r.avg_order_value)
                .collect::<Vec<f64>>(),
        ),
    ])
    .map_err(|e| DataError::Frame(format!("business frame: {e}")))
}

/// Combined campaign table (or one platform's slice of it) as a DataFrame.
pub fn combined_frame(records: &[AdRecord]) -> Result<DataFrame, DataError> {
    let dates: Vec<i32> = records
        .iter()
        .map(|r| (r.date - epoch()).num_days() as i32)
        .collect();

    DataFrame::new(vec![
        date_column("date", dates)?,
        Column::new(
            "platform".into(),
            records
                .iter()
                .map(|r| r.platform.as_str())
                .collect::<Vec<&str>>(),
        ),
        Column::new(
            "state".into(),
            records.iter().map(|r| r.state.as_str()).collect::<Vec<&str>>(),
        ),
        Column::new(
            "campaign".into(),
            records
                .iter()
                .map(|r| r.campaign.as_str())
                .collect::<Vec<&str>>(),
        ),
        Column::new(
            "impression".into(),
            records.iter().map(|r| r.impressions).collect::<Vec<u64>>(),
        ),
        Column::new(
            "clicks".into(),
            records.iter().map(|r| r.clicks).collect::<Vec<u64>>(),
        ),
        Column::new(
            "spend".into(),
            records.iter().map(|r| r.spend).collect::<Vec<f64>>(),
        ),
        Column::new(
            "attributed_revenue".into(),
            records
                .iter()
                .map(|r| r.attributed_revenue)
                .collect::<Vec<f64>>(),
        ),
        Column::new("ctr".into(), records.iter().map(|r| r.ctr).collect::<Vec<f64>>()),
        Column::new("cpc".into(), records.iter().map(|r| r.cpc).collect::<Vec<f64>>()),
        Column::new(
            "roas".into(),
            records.iter().map(|r| r.roas).collect::<Vec<f64>>(),
        ),
        Column::new("cpm".into(), records.iter().map(|r| r.cpm).collect::<Vec<f64>>()),
    ])
    .map_err(|e| DataError::Frame(format!("combined frame: {e}")))
}

/// Unified daily table as a DataFrame.
pub fn unified_frame(records: &[UnifiedDailyRecord]) -> Result<DataFrame, DataError> {
    let dates: Vec<i32> = records
        .iter()
        .map(|r| (r.date - epoch()).num_days() as i32)
        .collect();

    DataFrame::new(vec![
        date_column("date", dates)?,
        Column::new(
            "total_revenue".into(),
            records.iter().map(|r| r.total_revenue).collect::<Vec<f64>>(),
        ),
        Column::new(
            "gross_profit".into(),
            records.iter().map(|r| r.gross_profit).collect::<Vec<f64>>(),
        ),
        Column::new(
            "COGS".into(),
            records
                .iter()
                .map(|r| r.cost_of_goods_sold)
                .collect::<Vec<f64>>(),
        ),
        Column::new(
            "num_of_orders".into(),
            records.iter().map(|r| r.num_of_orders).collect::<Vec<u64>>(),
        ),
        Column::new(
            "new_customers".into(),
            records.iter().map(|r| r.new_customers).collect::<Vec<u64>>(),
        ),
        Column::new(
            "profit_margin".into(),
            records.iter().map(|r| r.profit_margin).collect::<Vec<f64>>(),
        ),
        Column::new(
            "avg_order_value".into(),
            records
                .iter()
                .map(|r| r.avg_order_value)
                .collect::<Vec<f64>>(),
        ),
        Column::new(
            "spend".into(),
            records.iter().map(|r| r.spend).collect::<Vec<f64>>(),
        ),
        Column::new(
            "attributed_revenue".into(),
            records
                .iter()
                .map(|r| r.attributed_revenue)
                .collect::<Vec<f64>>(),
        ),
        Column::new(
            "clicks".into(),
            records.iter().map(|r| r.clicks).collect::<Vec<u64>>(),
        ),
        Column::new(
            "impression".into(),
            records.iter().map(|r| r.impressions).collect::<Vec<u64>>(),
        ),
        Column::new(
            "daily_roas".into(),
            records.iter().map(|r| r.daily_roas).collect::<Vec<f64>>(),
        ),
        Column::new(
            "daily_ctr".into(),
            records.iter().map(|r| r.daily_ctr).collect::<Vec<f64>>(),
        ),
        Column::new(
            "marketing_efficiency".into(),
            records
                .iter()
                .map(|r| r.marketing_efficiency)
                .collect::<Vec<f64>>(),
        ),
    ])
    .map_err(|e| DataError::Frame(format!("unified frame: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Platform;

    #[test]
    fn combined_frame_has_date_typed_column() {
        let records = vec![AdRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            platform: Platform::Facebook,
            state: "CA".into(),
            campaign: "brand".into(),
            impressions: 2000,
            clicks: 40,
            spend: 100.0,
            attributed_revenue: 150.0,
            ctr: 2.0,
            cpc: 2.5,
            roas: 1.5,
            cpm: 50.0,
        }];

        let df = combined_frame(&records).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
        assert_eq!(
            df.column("spend").unwrap().f64().unwrap().get(0),
            Some(100.0)
        );
    }

    #[test]
    fn empty_tables_produce_empty_frames() {
        let df = business_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert!(df.column("profit_margin").is_ok());

        let df = unified_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert!(df.column("marketing_efficiency").is_ok());
    }
}
