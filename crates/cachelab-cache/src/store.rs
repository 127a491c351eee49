//! Process-wide data cache.

use std::collections::HashMap;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::entry::{CacheLookup, CachedEntry};
use crate::policy::FetchCachePolicy;

/// Process-wide async data cache keyed by fetch key.
///
/// Values are stored as JSON so one store can hold every demo's data. A
/// value that fails to round-trip is treated as a miss and recomputed, which
/// keeps every lookup infallible.
#[derive(Debug, Default)]
pub struct DataCache {
    entries: RwLock<HashMap<String, CachedEntry>>,
}

impl DataCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key` under `policy`, running `fetch` when the cache cannot
    /// serve the value.
    ///
    /// Returns the value together with the lookup outcome:
    /// - `NoStore` always bypasses and always runs `fetch`.
    /// - `Revalidate` serves fresh entries as hits; an elapsed entry is
    ///   refreshed and reported stale on the request that refreshed it.
    /// - `Static` computes once and serves hits forever after.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: &str,
        policy: FetchCachePolicy,
        fetch: F,
    ) -> (T, CacheLookup)
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if !policy.is_cacheable() {
            return (fetch().await, CacheLookup::bypass());
        }

        let cached = {
            let entries = self.entries.read().await;
            entries.get(key).cloned()
        };

        match cached {
            Some(entry) if !entry.is_expired() => {
                if let Ok(value) = serde_json::from_value(entry.value.clone()) {
                    return (value, CacheLookup::hit(&entry));
                }
                // Undeserializable entry: fall through and recompute.
                let (value, entry) = self.fetch_and_store(key, policy, fetch).await;
                (value, CacheLookup::miss(&entry))
            }
            Some(_) => {
                let (value, entry) = self.fetch_and_store(key, policy, fetch).await;
                (value, CacheLookup::stale(&entry))
            }
            None => {
                let (value, entry) = self.fetch_and_store(key, policy, fetch).await;
                (value, CacheLookup::miss(&entry))
            }
        }
    }

    /// Discard every entry. Returns the number of entries removed.
    pub async fn invalidate_all(&self) -> usize {
        let mut entries = self.entries.write().await;
        let count = entries.len();
        entries.clear();
        count
    }

    /// Discard entries whose key starts with `prefix`, the namespacing the
    /// fetch keys use (e.g. `demo:`). Returns the number removed.
    pub async fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn fetch_and_store<T, F, Fut>(
        &self,
        key: &str,
        policy: FetchCachePolicy,
        fetch: F,
    ) -> (T, CachedEntry)
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let value = fetch().await;
        let json = serde_json::to_value(&value).unwrap_or(serde_json::Value::Null);
        let entry = CachedEntry::new(json, policy.ttl());

        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), entry.clone());

        (value, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::CacheStatus;

    async fn count_fetch(counter: &std::cell::Cell<u32>) -> u32 {
        counter.set(counter.get() + 1);
        counter.get()
    }

    #[tokio::test]
    async fn test_no_store_always_bypasses() {
        let cache = DataCache::new();
        let calls = std::cell::Cell::new(0);

        for _ in 0..3 {
            let (_, lookup) = cache
                .get_or_fetch("k", FetchCachePolicy::NoStore, || count_fetch(&calls))
                .await;
            assert_eq!(lookup.status, CacheStatus::Bypass);
        }

        assert_eq!(calls.get(), 3);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_revalidate_miss_then_hit() {
        let cache = DataCache::new();
        let calls = std::cell::Cell::new(0);
        let policy = FetchCachePolicy::revalidate_secs(60);

        let (first, lookup) = cache.get_or_fetch("k", policy, || count_fetch(&calls)).await;
        assert_eq!(lookup.status, CacheStatus::Miss);

        let (second, lookup) = cache.get_or_fetch("k", policy, || count_fetch(&calls)).await;
        assert_eq!(lookup.status, CacheStatus::Hit);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_reports_stale_on_refresh() {
        let cache = DataCache::new();
        let calls = std::cell::Cell::new(0);
        let policy = FetchCachePolicy::Revalidate(std::time::Duration::ZERO);

        let (_, lookup) = cache.get_or_fetch("k", policy, || count_fetch(&calls)).await;
        assert_eq!(lookup.status, CacheStatus::Miss);

        // Backdate the entry so the zero-second interval has elapsed.
        {
            let mut entries = cache.entries.write().await;
            entries.get_mut("k").unwrap().created_at -= 1;
        }

        let (_, lookup) = cache.get_or_fetch("k", policy, || count_fetch(&calls)).await;
        assert_eq!(lookup.status, CacheStatus::Stale);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_static_computes_once() {
        let cache = DataCache::new();
        let calls = std::cell::Cell::new(0);

        let (first, _) = cache
            .get_or_fetch("snapshot", FetchCachePolicy::Static, || count_fetch(&calls))
            .await;
        let (second, lookup) = cache
            .get_or_fetch("snapshot", FetchCachePolicy::Static, || count_fetch(&calls))
            .await;

        assert_eq!(first, second);
        assert_eq!(lookup.status, CacheStatus::Hit);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_invalidation() {
        let cache = DataCache::new();
        let policy = FetchCachePolicy::revalidate_secs(60);

        cache.get_or_fetch("demo:a", policy, || async { 1u32 }).await;
        cache.get_or_fetch("demo:b", policy, || async { 2u32 }).await;
        cache.get_or_fetch("other", policy, || async { 3u32 }).await;

        assert_eq!(cache.invalidate_prefix("demo:").await, 2);
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.invalidate_all().await, 1);
        assert!(cache.is_empty().await);
    }
}
