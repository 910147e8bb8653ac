//! Domain records: one struct per table, one row per struct value.
//!
//! Every record is an immutable snapshot produced by one pipeline run.
//! Derived columns (ratios) are plain fields filled in by the cleaner so
//! that downstream consumers never recompute them.

mod ad;
mod business;
mod platform;
mod unified;

pub use ad::AdRecord;
pub use business::BusinessRecord;
pub use platform::Platform;
pub use unified::UnifiedDailyRecord;
