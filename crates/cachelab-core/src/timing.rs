//! Flush timing for streamed pages.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Timing context recording when the shell and each section were flushed.
///
/// The demo pages display these numbers so a reader can see the gap
/// between first byte and each section's arrival.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context anchored at now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a named timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Mark the start of a section's render.
    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section_{section}_start"));
    }

    /// Mark a section as flushed to the client.
    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section_{section}_sent"));
    }

    /// Elapsed time since the context was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time from request start to shell flush, if the shell was sent.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.marks
            .get("shell_sent")
            .map(|t| t.duration_since(self.start))
    }

    /// Flush timing for a specific section, if both marks exist.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let start = self.marks.get(&format!("section_{section}_start"))?;
        let sent = self.marks.get(&format!("section_{section}_sent"))?;

        Some(SectionTiming {
            name: section.to_string(),
            start: start.duration_since(self.start),
            sent: sent.duration_since(self.start),
            duration: sent.duration_since(*start),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Flush timing for a single section.
#[derive(Debug, Clone)]
pub struct SectionTiming {
    /// Section name.
    pub name: String,
    /// Time from request start to section start.
    pub start: Duration,
    /// Time from request start to section flush.
    pub sent: Duration,
    /// Duration between the two marks.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_mark() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_shell().is_none());

        timing.mark("shell_sent");
        assert!(timing.time_to_shell().is_some());
    }

    #[test]
    fn test_section_timing_requires_both_marks() {
        let mut timing = TimingContext::new();
        timing.mark_section_start("hero");
        assert!(timing.section_timing("hero").is_none());

        timing.mark_section_sent("hero");
        let t = timing.section_timing("hero").unwrap();
        assert_eq!(t.name, "hero");
        assert!(t.sent >= t.start);
    }
}
