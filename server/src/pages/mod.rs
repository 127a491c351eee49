//! Demo page renderers.
//!
//! Pages are plain functions building HTML strings inside a shared shell
//! frame; no templating engine, no client-side scripting. Whatever a page
//! demonstrates, the interesting part is the timestamps and hit/miss labels
//! it prints.

pub mod cache_demo;
pub mod index;
pub mod products;
pub mod rendering_demo;

use cachelab_streaming::{HeadContent, Shell};

/// Shared stylesheet for every demo page.
pub(crate) const SITE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f5f5; color: #222; }
.site-header { background: #1a1a2e; padding: 1rem 2rem; }
.site-header a { color: #9bb7ff; text-decoration: none; font-weight: bold; }
.container { max-width: 960px; margin: 0 auto; padding: 2rem; }
.back-link { display: inline-block; margin-bottom: 1rem; color: #2255cc; }
.card { background: white; border-radius: 8px; padding: 1.5rem; margin-bottom: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.card h3 { margin-top: 0; }
.note { background: #fff8e1; border-left: 4px solid #f0c030; padding: 0.75rem 1rem; margin-bottom: 1rem; font-size: 0.9rem; }
.mono { font-family: ui-monospace, monospace; font-size: 0.85rem; }
.status { display: inline-block; padding: 0.15rem 0.5rem; border-radius: 4px; font-size: 0.8rem; font-weight: bold; }
.status-hit { background: #e8f5e9; color: #2e7d32; }
.status-miss { background: #ffebee; color: #c62828; }
.status-stale { background: #fff3e0; color: #e65100; }
.status-bypass { background: #eceff1; color: #455a64; }
.filter-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
.filter-row a { padding: 0.4rem 0.9rem; border-radius: 6px; background: #e8e8e8; color: #222; text-decoration: none; }
.filter-row a.active { background: #2255cc; color: white; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.product-card { background: white; border: 1px solid #e0e0e0; border-radius: 8px; padding: 1rem; }
.stock-badge { font-size: 0.75rem; padding: 0.2rem 0.5rem; border-radius: 4px; }
.stock-in { background: #e8f5e9; color: #2e7d32; }
.stock-out { background: #ffebee; color: #c62828; }
.empty { text-align: center; color: #777; padding: 2rem 0; }
.action-row { display: flex; gap: 0.75rem; margin-bottom: 1rem; }
.action-row a { padding: 0.6rem 1.1rem; border-radius: 6px; color: white; text-decoration: none; font-weight: bold; }
.action-prefetch { background: #2979ff; }
.action-navigate { background: #2e7d32; }
.action-refresh { background: #c62828; }
.log-list { list-style: none; padding: 0; margin: 0; }
.log-list li { padding: 0.2rem 0; }
.log-time { color: #777; }
"#;

/// Render a complete buffered page inside the standard frame.
pub(crate) fn page(title: &str, body: &str) -> String {
    let shell = site_shell(title);
    format!("{}{}{}", shell.render_opening(), body, shell.render_closing())
}

/// The standard shell frame, also used by the streaming page.
pub(crate) fn site_shell(title: &str) -> Shell {
    Shell::new(
        HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(SITE_STYLES),
    )
    .with_body_start(
        "<body>\n<header class=\"site-header\"><a href=\"/\">cachelab</a></header>\n\
         <main class=\"container\">\n"
            .to_string(),
    )
    .with_body_end("</main>\n</body>\n</html>".to_string())
}

/// Back link to a parent page.
pub(crate) fn back_link(href: &str, label: &str) -> String {
    format!(r#"<a class="back-link" href="{href}">&larr; {label}</a>"#)
}

/// CSS class for a cache status badge.
pub(crate) fn status_class(status: cachelab_cache::CacheStatus) -> &'static str {
    use cachelab_cache::CacheStatus;
    match status {
        CacheStatus::Hit => "status status-hit",
        CacheStatus::Miss => "status status-miss",
        CacheStatus::Stale => "status status-stale",
        CacheStatus::Bypass => "status status-bypass",
    }
}

/// Minimal HTML escaping for text interpolated into pages.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_body_in_shell() {
        let html = page("Title", "<p>content</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Title</title>"));
        assert!(html.contains("<p>content</p>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
    }
}
