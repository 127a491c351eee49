//! The `/api/demo-data` endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use http::header;

use cachelab_data::produce_demo_response;

use crate::state::AppState;

/// GET /api/demo-data
///
/// Counts the call, waits the simulated upstream latency, and returns a
/// random payload. Never fails; no error responses are defined.
pub async fn demo_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let call_count = state.next_api_call();
    tracing::info!(call_count, "demo-data invoked");

    let response = produce_demo_response(call_count).await;

    ([(header::CACHE_CONTROL, "no-store")], Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachelab_core::ServerConfig;

    #[tokio::test(start_paused = true)]
    async fn test_counter_advances_once_per_request() {
        let state = Arc::new(AppState::new(ServerConfig {
            port: 0,
            base_url: "http://localhost:0".to_string(),
        }));

        for expected in 1..=3u64 {
            demo_data(State(Arc::clone(&state))).await;
            assert_eq!(state.api_call_count(), expected);
        }
    }
}
