//! Router segment cache with per-kind TTLs.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Kind of a cached page segment, determining how long it stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Statically rendered segment, cached for five minutes.
    Static,
    /// Dynamically rendered segment, cached for thirty seconds.
    Dynamic,
}

impl SegmentKind {
    /// Time-to-live for segments of this kind.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Static => Duration::from_secs(300),
            Self::Dynamic => Duration::from_secs(30),
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// A cached segment: the evidence that a path was prefetched or visited.
#[derive(Debug, Clone)]
pub struct CachedSegment {
    /// Path of the cached view.
    pub path: String,
    /// Segment kind, fixing its TTL.
    pub kind: SegmentKind,
    stored_at: Instant,
}

impl CachedSegment {
    fn new(path: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            path: path.into(),
            kind,
            stored_at: Instant::now(),
        }
    }

    /// Seconds since the segment was stored.
    pub fn age_secs(&self) -> u64 {
        self.stored_at.elapsed().as_secs()
    }

    /// Whether the segment's TTL has elapsed.
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.kind.ttl()
    }
}

/// Outcome of a segment lookup during navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentLookup {
    /// Served from the segment cache: instant transition.
    Hit,
    /// Not cached (or expired): the segment had to be fetched.
    Miss,
}

impl std::fmt::Display for SegmentLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hit => write!(f, "HIT"),
            Self::Miss => write!(f, "MISS"),
        }
    }
}

/// In-memory cache of page segments keyed by path.
///
/// Expired segments are dropped lazily on lookup; there is no background
/// sweeper and no eviction beyond TTL expiry.
#[derive(Debug, Default)]
pub struct RouterSegmentCache {
    segments: RwLock<HashMap<String, CachedSegment>>,
}

impl RouterSegmentCache {
    /// Create an empty segment cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a segment for `path`.
    pub async fn store(&self, path: &str, kind: SegmentKind) {
        let mut segments = self.segments.write().await;
        segments.insert(path.to_string(), CachedSegment::new(path, kind));
    }

    /// Look up `path`, dropping the entry if its TTL has elapsed.
    pub async fn lookup(&self, path: &str) -> SegmentLookup {
        let mut segments = self.segments.write().await;
        match segments.get(path) {
            Some(segment) if !segment.is_expired() => SegmentLookup::Hit,
            Some(_) => {
                segments.remove(path);
                SegmentLookup::Miss
            }
            None => SegmentLookup::Miss,
        }
    }

    /// Discard every segment. Returns how many were dropped.
    pub async fn clear(&self) -> usize {
        let mut segments = self.segments.write().await;
        let count = segments.len();
        segments.clear();
        count
    }

    /// Snapshot of the live segments, for on-page display.
    pub async fn snapshot(&self) -> Vec<CachedSegment> {
        let segments = self.segments.read().await;
        let mut live: Vec<CachedSegment> = segments
            .values()
            .filter(|s| !s.is_expired())
            .cloned()
            .collect();
        live.sort_by(|a, b| a.path.cmp(&b.path));
        live
    }
}
