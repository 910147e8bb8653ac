//! Source provider trait and structured error types.
//!
//! The SourceProvider trait abstracts over how a raw CSV body is obtained
//! (HTTP in production, in-memory fixtures in tests), so the pipeline can
//! be exercised without a network.

use crate::domain::Platform;
use thiserror::Error;

/// Which table a source feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The business sales ledger.
    Business,
    /// A per-platform campaign report.
    Platform(Platform),
}

impl SourceKind {
    /// Short label used in progress output and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Business => "business",
            SourceKind::Platform(p) => p.as_str(),
        }
    }
}

/// One fetchable source: what it is and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub kind: SourceKind,
    pub url: String,
}

/// Structured error types for data operations.
///
/// Only load-level failures are errors. Cell-level problems (a value that
/// will not coerce, a column that is absent) are handled by the cleaner
/// (coerce to 0 / exclude the record) and never surface here.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable fetching {table}: {reason}")]
    NetworkUnreachable { table: String, reason: String },

    #[error("HTTP {status} fetching {table}")]
    HttpStatus { table: String, status: u16 },

    #[error("malformed CSV in {table}: {reason}")]
    Csv { table: String, reason: String },

    #[error("export failed: {0}")]
    Export(String),

    #[error("dataframe construction failed: {0}")]
    Frame(String),
}

/// Trait for source providers (HTTP, in-memory fixtures).
///
/// Implementations return the raw delimited-text body of one source. The
/// cache layer sits above this trait — providers don't know about the cache.
pub trait SourceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the raw CSV body for one source.
    fn fetch(&self, source: &SourceSpec) -> Result<String, DataError>;
}

/// Progress callback for a multi-source load.
pub trait FetchProgress: Send {
    /// Called when starting to fetch a source.
    fn on_start(&self, source: &SourceSpec, index: usize, total: usize);

    /// Called when a source fetch completes.
    fn on_complete(&self, source: &SourceSpec, result: &Result<(), String>);

    /// Called when the entire batch is done.
    fn on_batch_complete(&self, succeeded: usize, total: usize);
}

/// Progress reporter that prints to stderr.
pub struct StderrProgress;

impl FetchProgress for StderrProgress {
    fn on_start(&self, source: &SourceSpec, index: usize, total: usize) {
        eprintln!("[{}/{}] fetching {}...", index + 1, total, source.kind.label());
    }

    fn on_complete(&self, source: &SourceSpec, result: &Result<(), String>) {
        match result {
            Ok(()) => eprintln!("  OK: {}", source.kind.label()),
            Err(e) => eprintln!("  FAIL: {}: {e}", source.kind.label()),
        }
    }

    fn on_batch_complete(&self, succeeded: usize, total: usize) {
        eprintln!("load complete: {succeeded}/{total} sources");
    }
}

/// Progress reporter that stays quiet.
pub struct SilentProgress;

impl FetchProgress for SilentProgress {
    fn on_start(&self, _source: &SourceSpec, _index: usize, _total: usize) {}
    fn on_complete(&self, _source: &SourceSpec, _result: &Result<(), String>) {}
    fn on_batch_complete(&self, _succeeded: usize, _total: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The error variants carry a plain table label, not a nested error
    /// cause, and must render it in their messages.
    #[test]
    fn errors_display_the_table_label() {
        let errors: Vec<(DataError, &str)> = vec![
            (
                DataError::NetworkUnreachable {
                    table: "business".into(),
                    reason: "connection refused".into(),
                },
                "network unreachable fetching business: connection refused",
            ),
            (
                DataError::HttpStatus {
                    table: "Facebook".into(),
                    status: 503,
                },
                "HTTP 503 fetching Facebook",
            ),
            (
                DataError::Csv {
                    table: "Google".into(),
                    reason: "unequal lengths".into(),
                },
                "malformed CSV in Google: unequal lengths",
            ),
        ];

        for (error, message) in errors {
            assert_eq!(error.to_string(), message);
            // No variant wraps an underlying error
            assert!(std::error::Error::source(&error).is_none());
        }
    }
}
