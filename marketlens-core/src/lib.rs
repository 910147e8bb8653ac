//! MarketLens Core — the data pipeline behind the marketing dashboard.
//!
//! Single-stage batch pipeline, stateless per run:
//! - Loader: fetch four CSV sources (business ledger + three ad platforms)
//! - Cleaner: column normalization, type coercion, null handling
//! - Metrics deriver: CTR/CPC/ROAS/CPM, profit margin, average order value
//! - Combiner: union of the platform tables, tagged and date-sorted
//! - Unifier: daily aggregation outer-joined with the ledger on date
//!
//! Outputs are typed record vectors plus Polars DataFrame views; the
//! combined and business tables can be serialized back to CSV for
//! download. An explicit run cache memoizes one full pipeline run keyed by
//! the source-set fingerprint.

pub mod cache;
pub mod clean;
pub mod combine;
pub mod data;
pub mod domain;
pub mod export;
pub mod metrics;
pub mod pipeline;
pub mod quality;
pub mod tables;
pub mod unify;

pub use cache::{InvalidationPolicy, PipelineCache};
pub use data::{
    default_sources, DataError, FetchProgress, HttpProvider, SourceKind, SourceProvider,
    SourceSet, SourceSpec, StderrProgress,
};
pub use domain::{AdRecord, BusinessRecord, Platform, UnifiedDailyRecord};
pub use export::ViewFilter;
pub use pipeline::PipelineOutput;
pub use quality::QualityReport;
