//! Shared server state.

use std::sync::atomic::{AtomicU64, Ordering};

use cachelab_cache::DataCache;
use cachelab_core::ServerConfig;
use cachelab_nav::NavigationDemo;

/// State shared by every handler.
///
/// Everything the demos mutate lives here, explicitly owned: the data cache,
/// the navigation demo, and the API call counter. The counter is an atomic
/// rather than a module-level global so its concurrent-access semantics are
/// visible at the type level.
#[derive(Debug)]
pub struct AppState {
    /// Resolved server configuration.
    pub config: ServerConfig,
    /// Process-wide data cache backing the cache demos.
    pub data_cache: DataCache,
    /// Router-cache demo state (segment cache + navigation log).
    pub nav: NavigationDemo,
    /// Process-lifetime call counter for `/api/demo-data`.
    api_calls: AtomicU64,
}

impl AppState {
    /// Create fresh state for one server process.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            data_cache: DataCache::new(),
            nav: NavigationDemo::new(),
            api_calls: AtomicU64::new(0),
        }
    }

    /// Increment the demo API counter and return the new count.
    ///
    /// Strictly increases by one per invocation and never resets within the
    /// process lifetime.
    pub fn next_api_call(&self) -> u64 {
        self.api_calls.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current call count without incrementing.
    pub fn api_call_count(&self) -> u64 {
        self.api_calls.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(ServerConfig {
            port: 0,
            base_url: "http://localhost:0".to_string(),
        })
    }

    #[test]
    fn test_counter_increments_by_exactly_one() {
        let state = test_state();
        assert_eq!(state.api_call_count(), 0);
        assert_eq!(state.next_api_call(), 1);
        assert_eq!(state.next_api_call(), 2);
        assert_eq!(state.next_api_call(), 3);
        assert_eq!(state.api_call_count(), 3);
    }
}
