//! Request-scoped fetch memoization.

use std::collections::HashMap;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

/// Memoizes fetches within a single request.
///
/// Several components on one page often want the same data; routing their
/// fetches through one `RequestMemo` makes the underlying operation run once
/// per request. The memo is created by the handler and dropped with it, so
/// nothing leaks across requests.
#[derive(Debug, Default)]
pub struct RequestMemo {
    results: Mutex<HashMap<String, serde_json::Value>>,
}

impl RequestMemo {
    /// Create an empty memo for one request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch `key`, running `fetch` only if no earlier fetch in this request
    /// produced it. Returns the value and whether it was served from the memo.
    pub async fn fetch_once<T, F, Fut>(&self, key: &str, fetch: F) -> (T, bool)
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        {
            let results = self.results.lock().await;
            if let Some(json) = results.get(key) {
                if let Ok(value) = serde_json::from_value(json.clone()) {
                    return (value, true);
                }
            }
        }

        let value = fetch().await;
        let json = serde_json::to_value(&value).unwrap_or(serde_json::Value::Null);
        self.results.lock().await.insert(key.to_string(), json);

        (value, false)
    }

    /// Number of memoized keys.
    pub async fn len(&self) -> usize {
        self.results.lock().await.len()
    }

    /// Whether nothing has been memoized yet.
    pub async fn is_empty(&self) -> bool {
        self.results.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_second_fetch_is_memoized() {
        let memo = RequestMemo::new();
        let calls = std::cell::Cell::new(0u32);

        let fetch = || async {
            calls.set(calls.get() + 1);
            "payload".to_string()
        };

        let (first, memoized) = memo.fetch_once("api", fetch).await;
        assert!(!memoized);

        let (second, memoized): (String, bool) = memo
            .fetch_once("api", || async { unreachable!("must be memoized") })
            .await;
        assert!(memoized);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_fetch_separately() {
        let memo = RequestMemo::new();

        memo.fetch_once("a", || async { 1u32 }).await;
        memo.fetch_once("b", || async { 2u32 }).await;

        assert_eq!(memo.len().await, 2);
    }
}
