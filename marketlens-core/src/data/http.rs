//! HTTP source provider.
//!
//! Fetches CSV bodies with a blocking reqwest client. A failed fetch aborts
//! the whole pipeline run — there are no retries and no partial datasets.

use super::provider::{DataError, SourceProvider, SourceSpec};
use std::time::Duration;

/// Blocking HTTP provider for CSV sources.
pub struct HttpProvider {
    client: reqwest::blocking::Client,
}

impl HttpProvider {
    pub fn new() -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DataError::NetworkUnreachable {
                table: "client".into(),
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl SourceProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch(&self, source: &SourceSpec) -> Result<String, DataError> {
        let resp = self
            .client
            .get(&source.url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable {
                table: source.kind.label().to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                table: source.kind.label().to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|e| DataError::NetworkUnreachable {
            table: source.kind.label().to_string(),
            reason: e.to_string(),
        })
    }
}
