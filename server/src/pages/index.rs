//! Landing page.

use axum::response::Html;

use super::page;

/// GET /
pub async fn index() -> Html<String> {
    let body = r#"<h1>cachelab</h1>
<p>Small demos that make cache layers and rendering strategies observable.
Open a page, reload it, and watch which values move and which stay put.</p>

<div class="card">
    <h3><a href="/cache-demo">Cache layers</a></h3>
    <p>Data cache, request memoization, full-route snapshot, router segment cache.</p>
</div>
<div class="card">
    <h3><a href="/rendering-demo">Rendering strategies</a></h3>
    <p>Static, dynamic, streaming, and partial rendering of the same kind of content.</p>
</div>
<div class="card">
    <h3><a href="/products">Product listing</a></h3>
    <p>A filterable product list fetched through the sample data provider.</p>
</div>
<div class="card">
    <h3><a href="/api/demo-data">Demo API</a> <span class="mono">GET /api/demo-data</span></h3>
    <p>Counted endpoint returning a fresh random payload after one second.</p>
</div>
"#;

    Html(page("cachelab", body))
}
