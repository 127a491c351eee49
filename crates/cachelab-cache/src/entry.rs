//! Cached entries and lookup status.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Status of a cache lookup, displayed verbatim on the demo pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// Fresh entry served from the cache.
    Hit,
    /// Entry existed but its interval had elapsed; it was refreshed.
    Stale,
    /// No entry; the upstream operation ran and the result was stored.
    Miss,
    /// Caching disabled for this fetch; nothing stored.
    Bypass,
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hit => write!(f, "HIT"),
            Self::Stale => write!(f, "STALE"),
            Self::Miss => write!(f, "MISS"),
            Self::Bypass => write!(f, "BYPASS"),
        }
    }
}

/// A stored cache entry with its TTL accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedEntry {
    /// The cached value, stored as JSON.
    pub value: serde_json::Value,
    /// Unix timestamp (seconds) when the entry was created.
    pub created_at: u64,
    /// Time-to-live in seconds. `None` means the entry never expires.
    pub ttl_secs: Option<u64>,
}

impl CachedEntry {
    /// Create a new entry valid from now.
    pub fn new(value: serde_json::Value, ttl: Option<Duration>) -> Self {
        Self {
            value,
            created_at: unix_now(),
            ttl_secs: ttl.map(|d| d.as_secs()),
        }
    }

    /// Whether the entry's interval has elapsed.
    pub fn is_expired(&self) -> bool {
        match self.ttl_secs {
            Some(ttl) => unix_now() > self.created_at + ttl,
            None => false,
        }
    }

    /// Age of the entry in seconds.
    pub fn age_secs(&self) -> u64 {
        unix_now().saturating_sub(self.created_at)
    }

    /// Remaining seconds before expiry. `None` for never-expiring entries.
    pub fn remaining_ttl_secs(&self) -> Option<u64> {
        let ttl = self.ttl_secs?;
        let expires_at = self.created_at + ttl;
        Some(expires_at.saturating_sub(unix_now()))
    }
}

/// Result of a cache lookup, alongside the value itself.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CacheLookup {
    /// Outcome of the lookup.
    pub status: CacheStatus,
    /// Age in seconds of the entry that was served (0 for fresh computes).
    pub age_secs: u64,
    /// Remaining TTL of the stored entry, where one exists and expires.
    pub remaining_ttl_secs: Option<u64>,
}

impl CacheLookup {
    pub(crate) fn bypass() -> Self {
        Self {
            status: CacheStatus::Bypass,
            age_secs: 0,
            remaining_ttl_secs: None,
        }
    }

    pub(crate) fn miss(entry: &CachedEntry) -> Self {
        Self {
            status: CacheStatus::Miss,
            age_secs: 0,
            remaining_ttl_secs: entry.remaining_ttl_secs(),
        }
    }

    pub(crate) fn stale(entry: &CachedEntry) -> Self {
        Self {
            status: CacheStatus::Stale,
            age_secs: 0,
            remaining_ttl_secs: entry.remaining_ttl_secs(),
        }
    }

    pub(crate) fn hit(entry: &CachedEntry) -> Self {
        Self {
            status: CacheStatus::Hit,
            age_secs: entry.age_secs(),
            remaining_ttl_secs: entry.remaining_ttl_secs(),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entry_is_not_expired() {
        let entry = CachedEntry::new(serde_json::json!(1), Some(Duration::from_secs(60)));
        assert!(!entry.is_expired());
        assert_eq!(entry.age_secs(), 0);
        assert_eq!(entry.remaining_ttl_secs(), Some(60));
    }

    #[test]
    fn test_zero_ttl_expires_in_the_past() {
        let mut entry = CachedEntry::new(serde_json::json!(1), Some(Duration::ZERO));
        entry.created_at -= 1;
        assert!(entry.is_expired());
    }

    #[test]
    fn test_unbounded_entry_never_expires() {
        let mut entry = CachedEntry::new(serde_json::json!("snapshot"), None);
        entry.created_at -= 3600;
        assert!(!entry.is_expired());
        assert_eq!(entry.remaining_ttl_secs(), None);
        assert!(entry.age_secs() >= 3600);
    }
}
