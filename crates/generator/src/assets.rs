//! Static files emitted next to the generated pages.

pub const STYLESHEET_PATH: &str = "style.css";
pub const TABS_SCRIPT_PATH: &str = "tabs.js";

const DEFAULT_ACCENT: &str = "#ff6b35";

/// Custom property block carrying the configured accent colour.
///
/// The value lands inside a `<style>` element unescaped, so anything other
/// than a plain colour literal falls back to the default.
pub fn accent_css(color: &str) -> String {
    let is_plain = !color.is_empty()
        && color.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ')
        });
    let color = if is_plain { color } else { DEFAULT_ACCENT };
    format!(":root {{ --accent: {}; }}", color)
}

/// Shows the panel named by the URL hash and marks its tab selected.
pub const TABS_JS: &str = r#"(function () {
  function activate(slug) {
    var panels = document.querySelectorAll('[data-tab-panel]');
    var found = false;
    panels.forEach(function (panel) {
      if (panel.getAttribute('data-tab-panel') === slug) { found = true; }
    });
    if (!found) { return; }
    panels.forEach(function (panel) {
      panel.hidden = panel.getAttribute('data-tab-panel') !== slug;
    });
    document.querySelectorAll('[data-tab]').forEach(function (tab) {
      tab.setAttribute('aria-selected', tab.getAttribute('data-tab') === slug ? 'true' : 'false');
    });
  }
  function fromHash() {
    if (location.hash.length > 1) { activate(location.hash.slice(1)); }
  }
  window.addEventListener('hashchange', fromHash);
  document.addEventListener('DOMContentLoaded', fromHash);
})();
"#;

/// Hot reload via Server-Sent Events, injected in preview mode only
pub const RELOAD_JS: &str = r#"(function () {
  var source = new EventSource('/_reload');
  source.onmessage = function () { location.reload(); };
  source.onerror = function () { source.close(); };
})();
"#;

pub const STYLE_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  line-height: 1.6;
  color: #1d1d1f;
  background: #fafafa;
}
a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }
.site-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.5rem 2rem;
  border-bottom: 1px solid #eee;
  background: white;
  position: sticky;
  top: 0;
}
.brand { font-weight: 700; color: #1d1d1f; }
.site-nav { display: flex; gap: 1rem; flex-wrap: wrap; list-style: none; }
.nav-link { color: #555; padding: 0.25rem 0.5rem; border-radius: 4px; }
.nav-link[aria-selected="true"] { color: white; background: var(--accent); }
.page { max-width: 960px; margin: 0 auto; padding: 3rem 2rem; }
.hero h1 { font-size: 2.5rem; line-height: 1.2; }
.hero .tagline { color: #666; font-size: 1.2rem; margin-top: 0.5rem; }
.tab-panel { margin-top: 2.5rem; }
.tab-panel h2 { margin-bottom: 1rem; }
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}
.project-card {
  background: white;
  border-radius: 8px;
  overflow: hidden;
  box-shadow: 0 2px 8px rgba(0,0,0,0.08);
  transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.project-card:hover { transform: translateY(-4px); box-shadow: 0 8px 20px rgba(0,0,0,0.12); }
.project-card img { width: 100%; aspect-ratio: 16 / 10; object-fit: cover; background: #eee; }
.card-body { padding: 1rem; }
.card-body p { color: #666; font-size: 0.95rem; }
.tags { display: flex; gap: 0.4rem; flex-wrap: wrap; list-style: none; margin: 0.75rem 0; }
.tags li { font-size: 0.75rem; background: #f0f0f0; padding: 0.1rem 0.5rem; border-radius: 999px; }
.article-header { margin-bottom: 2rem; }
.article-title { font-size: 2.25rem; line-height: 1.2; }
.byline { color: #888; margin-top: 0.5rem; }
.hero-image { width: 100%; border-radius: 8px; margin: 1.5rem 0; }
.content-blocks > * + * { margin-top: 1.25rem; }
.heading-lg { font-size: 1.6rem; margin-top: 2rem; }
.heading-md { font-size: 1.25rem; margin-top: 1.5rem; }
.heading { font-size: 1.1rem; }
.block-list { padding-left: 1.25rem; }
.block-code { background: #1d1d1f; color: #f5f5f7; border-radius: 6px; overflow-x: auto; }
.code-language { display: block; font-size: 0.75rem; padding: 0.5rem 1rem 0; color: #999; }
.block-code pre { padding: 0.75rem 1rem 1rem; font-family: "SF Mono", Menlo, monospace; font-size: 0.9rem; }
.block-quote { border-left: 3px solid var(--accent); padding-left: 1rem; font-style: italic; color: #444; }
.block-image img { width: 100%; border-radius: 6px; }
.block-image figcaption { font-size: 0.85rem; color: #888; text-align: center; margin-top: 0.5rem; }
.article-list { list-style: none; }
.article-summary + .article-summary { margin-top: 2rem; }
.article-summary .excerpt { color: #555; margin-top: 0.5rem; }
.related { margin-top: 3rem; border-top: 1px solid #eee; padding-top: 1.5rem; }
.timeline { list-style: none; }
.timeline > li + li { margin-top: 2rem; }
.testimonials blockquote { margin-top: 1rem; }
.not-found { text-align: center; padding: 4rem 0; }
.site-footer { border-top: 1px solid #eee; padding: 2rem; text-align: center; color: #888; font-size: 0.9rem; }
@media (max-width: 768px) {
  .site-header { flex-direction: column; gap: 1rem; }
  .hero h1 { font-size: 2rem; }
}
@media (prefers-reduced-motion: reduce) {
  .project-card { transition: none; }
}
"#;
