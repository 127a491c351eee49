//! Rendering strategy demo pages.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;
use futures::StreamExt;
use http::header;

use cachelab_cache::FetchCachePolicy;
use cachelab_core::{RequestId, TimingContext};
use cachelab_data::RouteSnapshot;
use cachelab_streaming::{DelayedContent, DelayedSection, StreamingSink};

use super::{back_link, escape_html, page, status_class};
use crate::state::AppState;

/// GET /rendering-demo
pub async fn overview() -> Html<String> {
    let body = format!(
        r#"{back}
<h1>Rendering strategies</h1>
<p>When is the HTML produced: once in advance, per request, progressively,
or a mix? Each page prints the timestamps that give it away.</p>

<div class="card"><h3><a href="/rendering-demo/static">Static</a></h3>
<p>Rendered from a process-lifetime snapshot; reloads change nothing.</p></div>
<div class="card"><h3><a href="/rendering-demo/dynamic">Dynamic</a></h3>
<p>Rendered per request, with request headers in the output.</p></div>
<div class="card"><h3><a href="/rendering-demo/streaming">Streaming</a></h3>
<p>Shell first, then three slow sections as each one finishes.</p></div>
<div class="card"><h3><a href="/rendering-demo/ppr">Partial</a></h3>
<p>A static frame and one dynamic section in a single response.</p></div>
"#,
        back = back_link("/", "Home"),
    );

    Html(page("Rendering strategies | cachelab", &body))
}

/// GET /rendering-demo/static
pub async fn static_rendering(State(state): State<Arc<AppState>>) -> Html<String> {
    let (snapshot, lookup) = state
        .data_cache
        .get_or_fetch("demo:static-render", FetchCachePolicy::Static, || async {
            RouteSnapshot::generate()
        })
        .await;

    let body = format!(
        r#"{back}
<h1>Static rendering</h1>
<div class="note">This page's values come from a snapshot under the
<span class="mono">{cache_control}</span> policy. Reloading changes nothing.</div>
<div class="card">
    <h3>Snapshot <span class="{status_class}">{status}</span></h3>
    <p>Rendered at <span class="mono">{generated_at}</span> (age {age}s)</p>
    <p>Random value: <strong>{value}</strong></p>
</div>
"#,
        back = back_link("/rendering-demo", "Rendering strategies"),
        cache_control = FetchCachePolicy::Static.cache_control_header(),
        status_class = status_class(lookup.status),
        status = lookup.status,
        generated_at = escape_html(&snapshot.generated_at),
        age = lookup.age_secs,
        value = snapshot.random_value,
    );

    Html(page("Static rendering | cachelab", &body))
}

/// GET /rendering-demo/dynamic
///
/// Rendered per request: fresh timestamp, fresh payload, and a request
/// header in the output. Nothing is stored.
pub async fn dynamic_rendering(headers: http::HeaderMap) -> Response {
    let render_time = Utc::now().to_rfc3339();
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let payload = cachelab_data::DemoPayload::generate();

    let body = format!(
        r#"{back}
<h1>Dynamic rendering</h1>
<div class="note">Every reload produces a new timestamp and payload; reading a request
header is exactly the kind of input that forces per-request rendering.</div>
<div class="card">
    <h3>This request</h3>
    <p>Rendered at <span class="mono">{render_time}</span></p>
    <p>Payload <span class="mono">{id}</span> = <strong>{value}</strong></p>
    <p>User-Agent: <span class="mono">{user_agent}</span></p>
    <p class="mono">Cache-Control: no-store</p>
</div>
"#,
        back = back_link("/rendering-demo", "Rendering strategies"),
        id = escape_html(&payload.id),
        value = payload.value,
        user_agent = escape_html(user_agent),
    );

    (
        [(header::CACHE_CONTROL, "no-store")],
        Html(page("Dynamic rendering | cachelab", &body)),
    )
        .into_response()
}

/// GET /rendering-demo/streaming
///
/// Flushes the shell immediately, then three sections with 1s/2s/3s delays,
/// each streamed as soon as it finishes loading.
pub async fn streaming() -> Response {
    let (tx, rx) = futures::channel::mpsc::channel::<Vec<u8>>(16);
    let request_id = RequestId::generate();

    tokio::spawn(async move {
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let shell = super::site_shell("Streaming | cachelab");
        let intro = format!(
            r#"{back}
<h1>Streaming</h1>
<div class="note">The shell you are reading arrived before any section was ready.
Sections follow at roughly one, two, and three seconds.</div>
<p class="mono">Request {request_id} &mdash; shell flushed at {shell_time}</p>
"#,
            back = back_link("/rendering-demo", "Rendering strategies"),
            shell_time = Utc::now().to_rfc3339(),
        );

        let opening = format!("{}{intro}", shell.render_opening());
        if sink.send_shell(&opening).await.is_err() {
            return;
        }

        // All three start now and load concurrently; awaiting them in delay
        // order flushes each at its own completion time.
        let handles: Vec<_> = [
            DelayedSection::new("Section one (1s)", Duration::from_secs(1)),
            DelayedSection::new("Section two (2s)", Duration::from_secs(2)),
            DelayedSection::new("Section three (3s)", Duration::from_secs(3)),
        ]
        .into_iter()
        .map(|section| tokio::spawn(async move { section.load().await }))
        .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let Ok(content) = handle.await else { continue };
            let name = format!("section-{}", i + 1);
            let html = render_delayed_card(&content);
            if sink.send_section(&name, &html).await.is_err() {
                return;
            }
            tracing::debug!(section = %name, "section flushed");
        }

        let _ = sink.finish(&shell.render_closing()).await;
    });

    let body = Body::from_stream(rx.map(|chunk| Ok::<_, Infallible>(Bytes::from(chunk))));

    Response::builder()
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-store")
        .body(body)
        .unwrap()
}

/// GET /rendering-demo/ppr
///
/// One response combining a frozen static frame with a dynamic section
/// rendered per request.
pub async fn partial_prerendering(State(state): State<Arc<AppState>>) -> Html<String> {
    let (snapshot, lookup) = state
        .data_cache
        .get_or_fetch("demo:ppr-frame", FetchCachePolicy::Static, || async {
            RouteSnapshot::generate()
        })
        .await;

    let dynamic = DelayedSection::new("Dynamic section (1s)", Duration::from_secs(1))
        .load()
        .await;

    let body = format!(
        r#"{back}
<h1>Partial rendering</h1>
<div class="note">The frame below is frozen; the section after it is rendered
per request. One page, both strategies.</div>
<div class="card">
    <h3>Static frame <span class="{status_class}">{status}</span></h3>
    <p>Frozen at <span class="mono">{generated_at}</span> &mdash; value <strong>{value}</strong></p>
</div>
{dynamic_card}
"#,
        back = back_link("/rendering-demo", "Rendering strategies"),
        status_class = status_class(lookup.status),
        status = lookup.status,
        generated_at = escape_html(&snapshot.generated_at),
        value = snapshot.random_value,
        dynamic_card = render_delayed_card(&dynamic),
    );

    Html(page("Partial rendering | cachelab", &body))
}

fn render_delayed_card(content: &DelayedContent) -> String {
    format!(
        r#"<div class="card">
    <h3>{label}</h3>
    <p>Load time: {delay_ms}ms</p>
    <p class="mono">Loaded at {loaded_at}</p>
</div>
"#,
        label = escape_html(&content.label),
        delay_ms = content.delay_ms,
        loaded_at = escape_html(&content.loaded_at),
    )
}
