//! Append-only navigation log.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One logged navigation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLogEntry {
    /// Human-readable local time, captured when the action was invoked.
    pub time: String,
    /// Free-text description of the action.
    pub action: String,
}

/// Append-only, invocation-ordered log of navigation actions.
///
/// Entries are never removed or reordered; the log lives and dies with the
/// view that owns it.
#[derive(Debug, Clone, Default)]
pub struct NavigationLog {
    entries: Vec<NavigationLogEntry>,
}

impl NavigationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action, stamping it with the current local time.
    ///
    /// The timestamp reflects the moment of invocation, never the completion
    /// of any asynchronous work the action may have started.
    pub fn record(&mut self, action: impl Into<String>) {
        self.entries.push(NavigationLogEntry {
            time: Local::now().format("%H:%M:%S").to_string(),
            action: action.into(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[NavigationLogEntry] {
        &self.entries
    }

    /// Number of logged actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no action has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_preserves_invocation_order() {
        let mut log = NavigationLog::new();
        log.record("A");
        log.record("B");
        log.record("C");

        let actions: Vec<&str> = log.entries().iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, ["A", "B", "C"]);
    }

    #[test]
    fn test_log_grows_monotonically() {
        let mut log = NavigationLog::new();
        assert!(log.is_empty());

        let mut last = 0;
        for i in 0..5 {
            log.record(format!("action {i}"));
            assert!(log.len() > last);
            last = log.len();
        }
    }

    #[test]
    fn test_entries_carry_a_timestamp() {
        let mut log = NavigationLog::new();
        log.record("prefetch");
        assert!(!log.entries()[0].time.is_empty());
    }
}
