//! Per-fetch cache policies.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache policy applied to a single fetch operation.
///
/// This is the knob the demo pages turn: the same upstream operation run
/// under different policies shows different hit/miss behavior on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "mode", content = "ttl")]
pub enum FetchCachePolicy {
    /// Never cache; every call reaches the upstream operation.
    NoStore,
    /// Cache, and treat the entry as stale after the given interval.
    Revalidate(Duration),
    /// Compute once per process lifetime and reuse forever.
    Static,
}

impl FetchCachePolicy {
    /// Convenience constructor for a revalidation interval in seconds.
    pub fn revalidate_secs(secs: u64) -> Self {
        Self::Revalidate(Duration::from_secs(secs))
    }

    /// Whether this policy stores anything at all.
    pub fn is_cacheable(&self) -> bool {
        !matches!(self, Self::NoStore)
    }

    /// Time-to-live for stored entries. `None` means the entry never expires.
    pub fn ttl(&self) -> Option<Duration> {
        match self {
            Self::NoStore => Some(Duration::ZERO),
            Self::Revalidate(ttl) => Some(*ttl),
            Self::Static => None,
        }
    }

    /// Equivalent `Cache-Control` value, shown on the demo pages.
    pub fn cache_control_header(&self) -> String {
        match self {
            Self::NoStore => "no-store".to_string(),
            Self::Revalidate(ttl) => {
                format!("public, max-age={}, must-revalidate", ttl.as_secs())
            }
            Self::Static => "public, max-age=31536000, immutable".to_string(),
        }
    }

    /// One-line description for page copy.
    pub fn describe(&self) -> String {
        match self {
            Self::NoStore => "fetched on every request".to_string(),
            Self::Revalidate(ttl) => {
                format!("cached, revalidated after {} seconds", ttl.as_secs())
            }
            Self::Static => "computed once per process lifetime".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_rendering() {
        assert_eq!(FetchCachePolicy::NoStore.cache_control_header(), "no-store");
        assert_eq!(
            FetchCachePolicy::revalidate_secs(60).cache_control_header(),
            "public, max-age=60, must-revalidate"
        );
        assert!(FetchCachePolicy::Static
            .cache_control_header()
            .contains("immutable"));
    }

    #[test]
    fn test_ttl() {
        assert_eq!(FetchCachePolicy::NoStore.ttl(), Some(Duration::ZERO));
        assert_eq!(
            FetchCachePolicy::revalidate_secs(30).ttl(),
            Some(Duration::from_secs(30))
        );
        assert_eq!(FetchCachePolicy::Static.ttl(), None);
    }
}
