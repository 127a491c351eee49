//! Payload types for the `/api/demo-data` endpoint.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

/// Simulated upstream latency for the demo endpoint.
pub const DEMO_API_DELAY: Duration = Duration::from_secs(1);

/// Randomly generated payload body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoPayload {
    /// Short random alphanumeric token.
    pub id: String,
    /// Random value in `0..1000`.
    pub value: u32,
}

impl DemoPayload {
    /// Generate a fresh random payload.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id: String = (0..9)
            .map(|_| {
                let chars = b"0123456789abcdefghijklmnopqrstuvwxyz";
                chars[rng.gen_range(0..chars.len())] as char
            })
            .collect();

        Self {
            id,
            value: rng.gen_range(0..1000),
        }
    }
}

/// Response body of the demo endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoResponse {
    pub message: String,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
    /// Process-lifetime call count at the time of this call.
    pub call_count: u64,
    pub data: DemoPayload,
}

/// Snapshot rendered into fully static pages.
///
/// Generated once per process lifetime; every reload shows the same values,
/// which is the point of the full-route-cache demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSnapshot {
    /// RFC 3339 timestamp of when the snapshot was generated.
    pub generated_at: String,
    /// Random value frozen into the snapshot.
    pub random_value: u32,
}

impl RouteSnapshot {
    /// Generate a fresh snapshot stamped now.
    pub fn generate() -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            random_value: rand::thread_rng().gen_range(0..1000),
        }
    }
}

/// Produce a demo response after the simulated upstream delay.
///
/// The caller owns the call counter and passes the already-incremented
/// count in; this function never fails.
pub async fn produce_demo_response(call_count: u64) -> DemoResponse {
    sleep(DEMO_API_DELAY).await;

    DemoResponse {
        message: "demo data fetched".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        call_count,
        data: DemoPayload::generate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = DemoPayload::generate();
        assert_eq!(payload.id.len(), 9);
        assert!(payload.id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(payload.value < 1000);
    }

    #[test]
    fn test_snapshot_value_range() {
        let snapshot = RouteSnapshot::generate();
        assert!(snapshot.random_value < 1000);
        assert!(!snapshot.generated_at.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_response_carries_the_given_count() {
        let response = produce_demo_response(7).await;
        assert_eq!(response.call_count, 7);
        assert!(!response.data.id.is_empty());
    }
}
