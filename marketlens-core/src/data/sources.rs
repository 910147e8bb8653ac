//! The configured source set: four CSV resources, fixed URLs.

use super::provider::{SourceKind, SourceSpec};
use crate::domain::Platform;

const BUSINESS_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/business-YECoODA5KKtmI4IIbwVl24o1PGO6qG.csv";
const FACEBOOK_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/Facebook-Jr4NjdoAto7VVJnPQusrGFITUZjrIu.csv";
const GOOGLE_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/Google-LLSCdcqmXDixSN5WDcgPnYmQn5OiMB.csv";
const TIKTOK_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/TikTok-4By8frzMQKKTVVmgEHE2daOuLnbs43.csv";

/// The full set of sources for one pipeline run: one business ledger plus
/// one report per platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    pub business: SourceSpec,
    pub platforms: Vec<SourceSpec>,
}

impl SourceSet {
    pub fn new(business_url: impl Into<String>, platforms: Vec<(Platform, String)>) -> Self {
        Self {
            business: SourceSpec {
                kind: SourceKind::Business,
                url: business_url.into(),
            },
            platforms: platforms
                .into_iter()
                .map(|(p, url)| SourceSpec {
                    kind: SourceKind::Platform(p),
                    url,
                })
                .collect(),
        }
    }

    /// All sources in fetch order: business first, then platforms.
    pub fn all(&self) -> Vec<&SourceSpec> {
        std::iter::once(&self.business)
            .chain(self.platforms.iter())
            .collect()
    }

    /// Content hash of the source URLs, used as the run-cache key.
    ///
    /// Two source sets with the same URLs in the same order produce the
    /// same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for spec in self.all() {
            hasher.update(spec.url.as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize().to_hex().to_string()
    }
}

/// The dashboard's fixed source set.
pub fn default_sources() -> SourceSet {
    SourceSet::new(
        BUSINESS_URL,
        vec![
            (Platform::Facebook, FACEBOOK_URL.to_string()),
            (Platform::Google, GOOGLE_URL.to_string()),
            (Platform::TikTok, TIKTOK_URL.to_string()),
        ],
    )
}
