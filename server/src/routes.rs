//! Route table.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::{api, pages};

/// Build the demo server's router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index::index))
        .route("/products", get(pages::products::products))
        .route("/cache-demo", get(pages::cache_demo::overview))
        .route("/cache-demo/data-cache", get(pages::cache_demo::data_cache))
        .route(
            "/cache-demo/request-memoization",
            get(pages::cache_demo::request_memoization),
        )
        .route(
            "/cache-demo/full-route-cache",
            get(pages::cache_demo::full_route_cache),
        )
        .route(
            "/cache-demo/router-cache",
            get(pages::cache_demo::router_cache),
        )
        .route("/rendering-demo", get(pages::rendering_demo::overview))
        .route(
            "/rendering-demo/static",
            get(pages::rendering_demo::static_rendering),
        )
        .route(
            "/rendering-demo/dynamic",
            get(pages::rendering_demo::dynamic_rendering),
        )
        .route(
            "/rendering-demo/streaming",
            get(pages::rendering_demo::streaming),
        )
        .route(
            "/rendering-demo/ppr",
            get(pages::rendering_demo::partial_prerendering),
        )
        .route("/api/demo-data", get(api::demo_data))
        .with_state(state)
}
