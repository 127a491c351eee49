//! The interactive navigation demo: prefetch, navigate, invalidate.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::sleep;

use crate::log::{NavigationLog, NavigationLogEntry};
use crate::segment::{RouterSegmentCache, SegmentKind, SegmentLookup};

/// Simulated latency for fetching a segment in the background.
pub const SEGMENT_FETCH_DELAY: Duration = Duration::from_millis(200);

/// The navigation demo: a segment cache plus an append-only action log.
///
/// Each action logs immediately, stamped at invocation time; the async side
/// effects (background prefetch, segment fetch on a cache miss) never delay
/// the log entry.
#[derive(Debug, Default)]
pub struct NavigationDemo {
    cache: Arc<RouterSegmentCache>,
    log: RwLock<NavigationLog>,
}

impl NavigationDemo {
    /// Create a demo with an empty cache and log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a background prefetch of `path` and log immediately.
    ///
    /// The log entry does not wait for the prefetch to complete; the segment
    /// appears in the cache once the background fetch finishes.
    pub async fn prefetch(&self, path: &str, kind: SegmentKind) {
        self.log
            .write()
            .await
            .record(format!("prefetch issued: {path}"));

        let cache = Arc::clone(&self.cache);
        let path = path.to_string();
        tokio::spawn(async move {
            sleep(SEGMENT_FETCH_DELAY).await;
            cache.store(&path, kind).await;
        });
    }

    /// Log the navigation intent, then transition to `path`.
    ///
    /// Returns whether the segment was served from the cache. On a miss the
    /// segment is fetched and stored, so returning to the same path hits.
    pub async fn navigate(&self, path: &str, kind: SegmentKind) -> SegmentLookup {
        self.log
            .write()
            .await
            .record(format!("navigation started: {path}"));

        let lookup = self.cache.lookup(path).await;
        if lookup == SegmentLookup::Miss {
            sleep(SEGMENT_FETCH_DELAY).await;
            self.cache.store(path, kind).await;
        }

        lookup
    }

    /// Discard every cached segment, then log the invalidation.
    pub async fn invalidate(&self) -> usize {
        let dropped = self.cache.clear().await;
        self.log
            .write()
            .await
            .record(format!("refresh: segment cache invalidated ({dropped} dropped)"));
        dropped
    }

    /// The log so far, oldest entry first.
    pub async fn log_entries(&self) -> Vec<NavigationLogEntry> {
        self.log.read().await.entries().to_vec()
    }

    /// Live cached segments, for on-page display.
    pub async fn cached_segments(&self) -> Vec<crate::segment::CachedSegment> {
        self.cache.snapshot().await
    }
}
