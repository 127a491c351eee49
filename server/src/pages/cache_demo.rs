//! Cache layer demo pages.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use cachelab_cache::{CacheLookup, FetchCachePolicy, RequestMemo};
use cachelab_data::{produce_demo_response, DemoPayload, RouteSnapshot};
use cachelab_nav::SegmentKind;

use super::{back_link, escape_html, page, status_class};
use crate::state::AppState;

/// Target view the router-cache demo prefetches and navigates to.
const NAV_TARGET: &str = "/cache-demo/data-cache";

/// Simulated latency of the upstream the data-cache page fetches.
const UPSTREAM_DELAY: Duration = Duration::from_millis(500);

/// GET /cache-demo
pub async fn overview() -> Html<String> {
    let body = format!(
        r#"{back}
<h1>Cache layers</h1>
<p>Four places a value can be served from before the upstream runs.
Each page shows the same trick: reload and compare timestamps.</p>

<div class="card"><h3><a href="/cache-demo/data-cache">Data cache</a></h3>
<p>One upstream, fetched under a 60-second revalidation policy and under no-store, side by side.</p></div>
<div class="card"><h3><a href="/cache-demo/request-memoization">Request memoization</a></h3>
<p>Three components ask for the same data in one request; the upstream runs once.</p></div>
<div class="card"><h3><a href="/cache-demo/full-route-cache">Full route cache</a></h3>
<p>A snapshot frozen at first render and served unchanged for the process lifetime.</p></div>
<div class="card"><h3><a href="/cache-demo/router-cache">Router cache</a></h3>
<p>Prefetch, navigate, invalidate; an append-only log records every action.</p></div>
"#,
        back = back_link("/", "Home"),
    );

    Html(page("Cache layers | cachelab", &body))
}

/// Sample the data-cache page fetches from its pretend upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UpstreamSample {
    fetched_at: String,
    payload: DemoPayload,
}

async fn fetch_upstream() -> UpstreamSample {
    sleep(UPSTREAM_DELAY).await;
    UpstreamSample {
        fetched_at: Utc::now().to_rfc3339(),
        payload: DemoPayload::generate(),
    }
}

/// GET /cache-demo/data-cache
///
/// The same upstream fetched twice: once cached with a 60-second
/// revalidation interval, once bypassing the cache entirely.
pub async fn data_cache(State(state): State<Arc<AppState>>) -> Html<String> {
    let cached_policy = FetchCachePolicy::revalidate_secs(60);
    let (cached, cached_lookup) = state
        .data_cache
        .get_or_fetch("demo:data-cache", cached_policy, fetch_upstream)
        .await;

    let fresh_policy = FetchCachePolicy::NoStore;
    let (fresh, fresh_lookup) = state
        .data_cache
        .get_or_fetch("demo:data-cache:fresh", fresh_policy, fetch_upstream)
        .await;

    tracing::info!(status = %cached_lookup.status, "data-cache lookup");

    let body = format!(
        r#"{back}
<h1>Data cache</h1>
<div class="note">The same upstream operation, fetched twice. Reload within 60 seconds:
the left value stays, the right value moves.</div>
{cached_card}
{fresh_card}
"#,
        back = back_link("/cache-demo", "Cache layers"),
        cached_card = render_sample_card("Cached (60s revalidate)", &cached, cached_policy, cached_lookup),
        fresh_card = render_sample_card("No store", &fresh, fresh_policy, fresh_lookup),
    );

    Html(page("Data cache | cachelab", &body))
}

fn render_sample_card(
    title: &str,
    sample: &UpstreamSample,
    policy: FetchCachePolicy,
    lookup: CacheLookup,
) -> String {
    let ttl_line = match lookup.remaining_ttl_secs {
        Some(remaining) => format!("<p>Expires in <strong>{remaining}s</strong></p>"),
        None => String::new(),
    };

    format!(
        r#"<div class="card">
    <h3>{title} <span class="{status_class}">{status}</span></h3>
    <p class="mono">Cache-Control: {cache_control}</p>
    <p>Fetched at <span class="mono">{fetched_at}</span> (entry age {age}s)</p>
    <p>Payload <span class="mono">{id}</span> = <strong>{value}</strong></p>
    {ttl_line}
</div>
"#,
        status_class = status_class(lookup.status),
        status = lookup.status,
        cache_control = policy.cache_control_header(),
        fetched_at = escape_html(&sample.fetched_at),
        age = lookup.age_secs,
        id = escape_html(&sample.payload.id),
        value = sample.payload.value,
    )
}

/// GET /cache-demo/request-memoization
///
/// Three components render the same demo data in one request. Their fetches
/// go through a request-scoped memo, so the counted upstream runs once.
pub async fn request_memoization(State(state): State<Arc<AppState>>) -> Html<String> {
    let memo = RequestMemo::new();
    let endpoint = format!("{}/api/demo-data", state.config.base_url);

    let mut cards = String::new();
    for component in ["one", "two", "three"] {
        let (response, memoized) = memo
            .fetch_once("demo-data", || async {
                produce_demo_response(state.next_api_call()).await
            })
            .await;

        let source = if memoized { "memoized" } else { "fetched" };
        cards.push_str(&format!(
            r#"<div class="card">
    <h3>Component {component} <span class="status status-{badge}">{source}</span></h3>
    <p>Payload <span class="mono">{id}</span> = <strong>{value}</strong></p>
    <p>Upstream call count at fetch time: <strong>{count}</strong></p>
</div>
"#,
            badge = if memoized { "hit" } else { "miss" },
            id = escape_html(&response.data.id),
            value = response.data.value,
            count = response.call_count,
        ));
    }

    let body = format!(
        r#"{back}
<h1>Request memoization</h1>
<div class="note">All three components fetch <span class="mono">{endpoint}</span>.
The call counter advanced once for this whole page render.</div>
{cards}
<p>Process-lifetime call count now: <strong>{total}</strong></p>
"#,
        back = back_link("/cache-demo", "Cache layers"),
        endpoint = escape_html(&endpoint),
        total = state.api_call_count(),
    );

    Html(page("Request memoization | cachelab", &body))
}

/// GET /cache-demo/full-route-cache
///
/// The whole page derives from a snapshot computed once per process
/// lifetime; every reload shows identical values.
pub async fn full_route_cache(State(state): State<Arc<AppState>>) -> Html<String> {
    let (snapshot, lookup) = state
        .data_cache
        .get_or_fetch("demo:full-route", FetchCachePolicy::Static, || async {
            RouteSnapshot::generate()
        })
        .await;

    let body = format!(
        r#"{back}
<h1>Full route cache</h1>
<div class="note">Reload as often as you like; these values were frozen when this route
first rendered and will not change until the process restarts.</div>
<div class="card">
    <h3>Frozen snapshot <span class="{status_class}">{status}</span></h3>
    <p>Generated at <span class="mono">{generated_at}</span> (age {age}s)</p>
    <p>Random value: <strong>{value}</strong></p>
    <p class="mono">Cache-Control: {cache_control}</p>
</div>
"#,
        back = back_link("/cache-demo", "Cache layers"),
        status_class = status_class(lookup.status),
        status = lookup.status,
        generated_at = escape_html(&snapshot.generated_at),
        age = lookup.age_secs,
        value = snapshot.random_value,
        cache_control = FetchCachePolicy::Static.cache_control_header(),
    );

    Html(page("Full route cache | cachelab", &body))
}

/// Query parameter selecting a router-cache action.
#[derive(Debug, Deserialize)]
pub struct RouterCacheQuery {
    action: Option<String>,
}

/// GET /cache-demo/router-cache
///
/// The interactive demo: `?action=prefetch|navigate|refresh` performs the
/// action and redirects, so a reload never replays it; without an action the
/// page renders the log and the live segments.
pub async fn router_cache(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouterCacheQuery>,
) -> Response {
    match query.action.as_deref() {
        Some("prefetch") => {
            state.nav.prefetch(NAV_TARGET, SegmentKind::Static).await;
            return Redirect::to("/cache-demo/router-cache").into_response();
        }
        Some("navigate") => {
            let lookup = state.nav.navigate(NAV_TARGET, SegmentKind::Static).await;
            tracing::info!(%lookup, path = NAV_TARGET, "demo navigation");
            return Redirect::to(NAV_TARGET).into_response();
        }
        Some("refresh") => {
            state.nav.invalidate().await;
            return Redirect::to("/cache-demo/router-cache").into_response();
        }
        _ => {}
    }

    let entries = state.nav.log_entries().await;
    let log_html = if entries.is_empty() {
        r#"<p class="empty">No actions yet</p>"#.to_string()
    } else {
        let items: String = entries
            .iter()
            .map(|e| {
                format!(
                    r#"<li class="mono"><span class="log-time">[{}]</span> {}</li>
"#,
                    escape_html(&e.time),
                    escape_html(&e.action)
                )
            })
            .collect();
        format!("<ul class=\"log-list\">\n{items}</ul>")
    };

    let segments = state.nav.cached_segments().await;
    let segments_html = if segments.is_empty() {
        r#"<p class="empty">Segment cache is empty</p>"#.to_string()
    } else {
        let items: String = segments
            .iter()
            .map(|s| {
                format!(
                    r#"<li class="mono">{} &mdash; {} segment, cached {}s ago</li>
"#,
                    escape_html(&s.path),
                    s.kind,
                    s.age_secs()
                )
            })
            .collect();
        format!("<ul class=\"log-list\">\n{items}</ul>")
    };

    let body = format!(
        r#"{back}
<h1>Router cache</h1>
<div class="note">1. Prefetch stores the target segment in the background.
2. Navigate is instant when the segment is cached. 3. Refresh throws every segment away.</div>
<div class="action-row">
    <a class="action-prefetch" href="/cache-demo/router-cache?action=prefetch">1. Prefetch</a>
    <a class="action-navigate" href="/cache-demo/router-cache?action=navigate">2. Navigate</a>
    <a class="action-refresh" href="/cache-demo/router-cache?action=refresh">3. Clear cache</a>
</div>
<div class="card"><h3>Navigation log</h3>
{log_html}</div>
<div class="card"><h3>Cached segments</h3>
{segments_html}</div>
"#,
        back = back_link("/cache-demo", "Cache layers"),
    );

    Html(page("Router cache | cachelab", &body)).into_response()
}
