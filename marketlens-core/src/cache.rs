//! Run memoization: an explicit read-through cache for full pipeline runs.
//!
//! The cache holds at most one run, keyed by the source-set fingerprint.
//! Freshness is decided by an injectable invalidation policy; nothing here
//! persists across processes.

use crate::data::provider::{DataError, FetchProgress, SourceProvider};
use crate::data::SourceSet;
use crate::pipeline::{self, PipelineOutput};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// When a cached run stops being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationPolicy {
    /// Entries live until `invalidate()` is called.
    Manual,
    /// Entries expire after the given duration.
    Ttl(Duration),
}

struct CachedRun {
    key: String,
    cached_at: Instant,
    output: Arc<PipelineOutput>,
}

/// Memoizes one full pipeline run keyed by the source-set fingerprint.
pub struct PipelineCache {
    policy: InvalidationPolicy,
    slot: Mutex<Option<CachedRun>>,
}

impl PipelineCache {
    pub fn new(policy: InvalidationPolicy) -> Self {
        Self {
            policy,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached output for `sources` if fresh, otherwise run the
    /// pipeline and cache the result.
    pub fn get_or_run(
        &self,
        provider: &dyn SourceProvider,
        sources: &SourceSet,
        progress: &dyn FetchProgress,
    ) -> Result<Arc<PipelineOutput>, DataError> {
        let key = sources.fingerprint();

        {
            let slot = self.slot.lock().unwrap();
            if let Some(cached) = slot.as_ref() {
                if cached.key == key && self.is_fresh(cached) {
                    return Ok(Arc::clone(&cached.output));
                }
            }
        }

        // Run outside the lock; fetching is the slow part
        let output = Arc::new(pipeline::run(provider, sources, progress)?);

        let mut slot = self.slot.lock().unwrap();
        *slot = Some(CachedRun {
            key,
            cached_at: Instant::now(),
            output: Arc::clone(&output),
        });
        Ok(output)
    }

    /// Drop the cached run, whatever the policy.
    pub fn invalidate(&self) {
        *self.slot.lock().unwrap() = None;
    }

    fn is_fresh(&self, cached: &CachedRun) -> bool {
        match self.policy {
            InvalidationPolicy::Manual => true,
            InvalidationPolicy::Ttl(ttl) => cached.cached_at.elapsed() < ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::{SilentProgress, SourceSpec};
    use crate::domain::Platform;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that serves fixed fixtures and counts fetches.
    struct CountingProvider {
        fetches: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                fetches: AtomicUsize::new(0),
            }
        }
    }

    impl SourceProvider for CountingProvider {
        fn name(&self) -> &str {
            "counting"
        }

        fn fetch(&self, source: &SourceSpec) -> Result<String, DataError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(match source.kind.label() {
                "business" => "date,total revenue,gross profit,COGS,# of orders,new customers\n\
                               2024-01-01,1000,400,600,10,3\n"
                    .to_string(),
                _ => "date,impression,clicks,spend,attributed revenue,state,campaign\n\
                      2024-01-01,2000,40,100,150,CA,brand\n"
                    .to_string(),
            })
        }
    }

    fn sources() -> SourceSet {
        SourceSet::new(
            "test://business",
            vec![
                (Platform::Facebook, "test://facebook".into()),
                (Platform::Google, "test://google".into()),
                (Platform::TikTok, "test://tiktok".into()),
            ],
        )
    }

    #[test]
    fn second_call_is_served_from_cache() {
        let provider = CountingProvider::new();
        let cache = PipelineCache::new(InvalidationPolicy::Manual);
        let sources = sources();

        let first = cache
            .get_or_run(&provider, &sources, &SilentProgress)
            .unwrap();
        let second = cache
            .get_or_run(&provider, &sources, &SilentProgress)
            .unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 4);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn invalidate_forces_a_fresh_run() {
        let provider = CountingProvider::new();
        let cache = PipelineCache::new(InvalidationPolicy::Manual);
        let sources = sources();

        cache
            .get_or_run(&provider, &sources, &SilentProgress)
            .unwrap();
        cache.invalidate();
        cache
            .get_or_run(&provider, &sources, &SilentProgress)
            .unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn unexpired_ttl_serves_the_cached_run() {
        let provider = CountingProvider::new();
        let cache = PipelineCache::new(InvalidationPolicy::Ttl(Duration::from_secs(3600)));
        let sources = sources();

        let first = cache
            .get_or_run(&provider, &sources, &SilentProgress)
            .unwrap();
        let second = cache
            .get_or_run(&provider, &sources, &SilentProgress)
            .unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 4);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn zero_ttl_never_serves_cached_runs() {
        let provider = CountingProvider::new();
        let cache = PipelineCache::new(InvalidationPolicy::Ttl(Duration::ZERO));
        let sources = sources();

        cache
            .get_or_run(&provider, &sources, &SilentProgress)
            .unwrap();
        cache
            .get_or_run(&provider, &sources, &SilentProgress)
            .unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn different_source_set_misses_the_cache() {
        let provider = CountingProvider::new();
        let cache = PipelineCache::new(InvalidationPolicy::Manual);

        cache
            .get_or_run(&provider, &sources(), &SilentProgress)
            .unwrap();

        let other = SourceSet::new(
            "test://other-business",
            vec![(Platform::Facebook, "test://facebook".into())],
        );
        cache.get_or_run(&provider, &other, &SilentProgress).unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 6);
    }
}
