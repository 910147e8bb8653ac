//! Pipeline orchestrator: load → clean → derive → combine → unify.
//!
//! Each run is a stateless single pass. Any fetch or parse failure aborts
//! the whole run — no partial dataset is ever produced.

use crate::clean;
use crate::combine;
use crate::data::provider::{DataError, FetchProgress, SourceKind, SourceProvider};
use crate::data::{RawTable, SourceSet};
use crate::domain::{AdRecord, BusinessRecord, Platform, UnifiedDailyRecord};
use crate::unify;

/// All tables produced by one pipeline run.
///
/// Immutable snapshot: the presentation layer reads these (directly or via
/// the `tables` DataFrame views) and never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub business: Vec<BusinessRecord>,
    pub platforms: Vec<(Platform, Vec<AdRecord>)>,
    pub combined: Vec<AdRecord>,
    pub unified: Vec<UnifiedDailyRecord>,
}

/// Run the full pipeline against one source set.
///
/// All four sources are fetched and parsed before any cleaning starts, so
/// a late failure cannot leave a half-built output behind.
pub fn run(
    provider: &dyn SourceProvider,
    sources: &SourceSet,
    progress: &dyn FetchProgress,
) -> Result<PipelineOutput, DataError> {
    let specs = sources.all();
    let total = specs.len();
    let mut raw: Vec<(SourceKind, RawTable)> = Vec::with_capacity(total);

    for (i, spec) in specs.iter().enumerate() {
        progress.on_start(spec, i, total);
        let result = provider
            .fetch(spec)
            .and_then(|body| RawTable::parse(spec, &body));
        match result {
            Ok(table) => {
                progress.on_complete(spec, &Ok(()));
                raw.push((spec.kind, table));
            }
            Err(e) => {
                progress.on_complete(spec, &Err(e.to_string()));
                progress.on_batch_complete(raw.len(), total);
                return Err(e);
            }
        }
    }
    progress.on_batch_complete(total, total);

    let mut business = Vec::new();
    let mut platforms: Vec<(Platform, Vec<AdRecord>)> = Vec::new();

    for (kind, table) in &raw {
        match kind {
            SourceKind::Business => business = clean::clean_business(table),
            SourceKind::Platform(p) => {
                platforms.push((*p, clean::clean_platform(table, *p)));
            }
        }
    }

    let combined = combine::combine_platforms(platforms.clone());
    let unified = unify::unify(&business, &combined);

    Ok(PipelineOutput {
        business,
        platforms,
        combined,
        unified,
    })
}
