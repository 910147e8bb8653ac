//! Source loading: provider trait, HTTP fetch, source registry, CSV ingest.

pub mod http;
pub mod ingest;
pub mod provider;
pub mod sources;

pub use http::HttpProvider;
pub use ingest::{ColumnMap, RawTable};
pub use provider::{DataError, FetchProgress, SourceKind, SourceProvider, SourceSpec, StderrProgress};
pub use sources::{default_sources, SourceSet};
