//! Delayed sections: staggered content availability made visible.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

/// A content section that becomes available after a configured delay.
///
/// Several of these with different delays, loaded concurrently, are what the
/// streaming page flushes one by one.
#[derive(Debug, Clone)]
pub struct DelayedSection {
    /// Label shown with the loaded content.
    pub label: String,
    /// How long the section takes to become available.
    pub delay: Duration,
}

impl DelayedSection {
    /// Create a section with a label and a delay.
    pub fn new(label: impl Into<String>, delay: Duration) -> Self {
        Self {
            label: label.into(),
            delay,
        }
    }

    /// Wait the full delay, then report the loaded record.
    ///
    /// The timestamp is captured at completion, not invocation, so the page
    /// shows when each section actually arrived. The wait always completes;
    /// there is no cancellation or timeout path.
    pub async fn load(&self) -> DelayedContent {
        sleep(self.delay).await;

        DelayedContent {
            label: self.label.clone(),
            delay_ms: self.delay.as_millis() as u64,
            loaded_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Record produced when a delayed section finishes loading.
///
/// Ephemeral: recomputed on every render pass, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedContent {
    /// Label of the section that loaded.
    pub label: String,
    /// Configured delay in milliseconds.
    pub delay_ms: u64,
    /// RFC 3339 timestamp captured when the wait completed.
    pub loaded_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_completion_is_at_least_start_plus_delay() {
        let delay = Duration::from_millis(30);
        let section = DelayedSection::new("slow", delay);

        let started = Utc::now();
        let content = section.load().await;

        let loaded = DateTime::parse_from_rfc3339(&content.loaded_at).unwrap();
        assert!(loaded.signed_duration_since(started).num_milliseconds() >= 30);
        assert_eq!(content.delay_ms, 30);
        assert_eq!(content.label, "slow");
    }

    #[tokio::test]
    async fn test_concurrent_sections_are_independent() {
        let fast = DelayedSection::new("fast", Duration::from_millis(10));
        let slow = DelayedSection::new("slow", Duration::from_millis(40));

        let (a, b) = futures::join!(fast.load(), slow.load());
        assert_eq!(a.label, "fast");
        assert_eq!(b.label, "slow");
        assert_eq!(a.delay_ms, 10);
        assert_eq!(b.delay_ms, 40);
    }
}
