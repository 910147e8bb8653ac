//! Advertising platform enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The advertising platforms the dashboard ingests.
///
/// Adding a platform means adding a variant here and a source URL in
/// `data::sources`. Everything downstream (combine, unify, export) is
/// platform-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    Google,
    TikTok,
}

impl Platform {
    /// All configured platforms, in ingest order.
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Google, Platform::TikTok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Google => "Google",
            Platform::TikTok => "TikTok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "google" => Ok(Platform::Google),
            "tiktok" => Ok(Platform::TikTok),
            other => Err(format!("unknown platform '{other}'")),
        }
    }
}
