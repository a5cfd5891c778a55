//! HTML page assembly.
//!
//! The page is a single self-contained document: the stylesheet and viewer
//! script are compiled into the binary, the graph and view settings are
//! embedded as JSON, and only vis-network plus plugin assets come from a CDN.

use crate::error::MindmapError;
use crate::layout::Layout;
use crate::markdown::render_html;
use crate::model::{Edge, MindMap, Node};
use crate::plugins::PluginSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

const VIS_NETWORK_URL: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

/// Settings handed to the browser viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    pub colors: Vec<String>,
    pub color_freeze_level: u32,
    pub max_width: u32,
    pub spacing_horizontal: u32,
    pub spacing_vertical: u32,
    pub line_width: u32,
    pub duration: u32,
    pub initial_expand_level: i32,
    pub zoom: bool,
    pub pan: bool,
    pub toolbar: bool,
    pub theme: String,
    pub layout: String,
    pub plugins: BTreeMap<String, bool>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            colors: [
                "#1976d2", "#388e3c", "#f57c00", "#7b1fa2", "#c2185b", "#00796b", "#5d4037",
                "#455a64",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            color_freeze_level: 0,
            max_width: 200,
            spacing_horizontal: 80,
            spacing_vertical: 5,
            line_width: 2,
            duration: 500,
            initial_expand_level: -1,
            zoom: true,
            pan: true,
            toolbar: true,
            theme: "default".to_string(),
            layout: Layout::default().name().to_string(),
            plugins: PluginSet::default()
                .enabled_names()
                .into_iter()
                .map(|name| (name.to_string(), true))
                .collect(),
        }
    }
}

/// Everything needed to render one mind map page.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub title: &'a str,
    pub mindmap: &'a MindMap,
    /// Full original document, shown with line numbers
    pub source: &'a str,
    /// Markdown body without frontmatter, rendered to HTML
    pub body: &'a str,
    pub view: &'a ViewOptions,
    pub layout: Layout,
    /// vis-network options merged over the layout preset
    pub layout_overrides: Option<&'a serde_json::Value>,
    pub plugins: &'a PluginSet,
}

/// The `window.MINDMAP` object read by the viewer script.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
    config: &'a ViewOptions,
    layout: &'static str,
    layout_options: serde_json::Value,
    layouts: serde_json::Value,
}

pub fn render_page(page: &Page<'_>) -> Result<String, MindmapError> {
    let css = include_str!("../assets/mindmap.css");
    let script = include_str!("../assets/mindmap.js");

    let title = html_escape(page.title);
    let graph = page.mindmap.serialize();
    let data = script_json(&PageData {
        nodes: graph.nodes,
        edges: graph.edges,
        config: page.view,
        layout: page.layout.name(),
        layout_options: match page.layout_overrides {
            Some(overrides) => page.layout.options_with(overrides),
            None => page.layout.options(),
        },
        layouts: Layout::options_table(),
    })?;

    let assets = page.plugins.assets();
    let plugin_css = assets
        .css
        .iter()
        .map(|href| format!(r#"  <link rel="stylesheet" href="{href}">"#))
        .collect::<Vec<_>>()
        .join("\n");
    let plugin_js = assets
        .js
        .iter()
        .map(|src| format!(r#"  <script src="{src}"></script>"#))
        .collect::<Vec<_>>()
        .join("\n");
    let plugin_inline_css = assets.inline_css.join("\n");
    let layout_css = page.layout.styles();

    let numbered = numbered_lines(page.source);
    let document_html = render_html(page.body);
    let toolbar_class = if page.view.toolbar { "" } else { " hidden" };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="mindmap">
  <title>{title}</title>
  <script src="{VIS_NETWORK_URL}"></script>
{plugin_css}
{plugin_js}
  <style>
{css}
{plugin_inline_css}
{layout_css}
  </style>
</head>
<body class="theme-{theme}">
<div id="toolbar" class="toolbar{toolbar_class}">
  <span class="toolbar-title">{title}</span>
  <button type="button" data-action="expand">Expand all</button>
  <button type="button" data-action="collapse">Collapse all</button>
  <button type="button" data-action="fit">Fit</button>
  <select id="layout-select" aria-label="Layout"></select>
  <button type="button" data-action="source">Source</button>
</div>
<main class="workspace">
  <div id="mindmap" class="mindmap"></div>
  <aside id="source" class="source-panel">
    <div class="source-tabs">
      <button type="button" data-tab="numbered" class="active">Markdown</button>
      <button type="button" data-tab="rendered">Preview</button>
    </div>
    <pre id="numbered" class="source-lines">{numbered}</pre>
    <article id="rendered" class="source-rendered hidden">
{document_html}
    </article>
  </aside>
</main>
<script>
window.MINDMAP = {data};
</script>
<script>
{script}
</script>
</body>
</html>"#,
        theme = html_escape(&page.view.theme),
    );

    Ok(html)
}

/// One span per source line, anchored as `line-N` for the viewer to scroll to.
fn numbered_lines(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for (index, line) in source.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let n = index + 1;
        let _ = write!(
            out,
            r#"<span id="line-{n}" class="line-number">{n:3}</span> {}"#,
            html_escape(line)
        );
    }
    out
}

/// JSON safe to place inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String, MindmapError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
