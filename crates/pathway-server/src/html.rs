//! Embedded dashboard page template.
//!
//! The page is fully self-contained apart from Plotly.js loaded from its
//! CDN: both figure specifications are embedded as JSON at render time and
//! plotted client-side. Pan/zoom/hover come from Plotly for free.

/// Fixed page heading.
pub const DASHBOARD_TITLE: &str = "Voting Rights Pathway Dashboard";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: #ffffff; color: #111; font-family: sans-serif; }
  h1 { text-align: center; padding: 16px 0 8px; font-size: 26px; }
  .panel { width: 100%; height: 460px; }
</style>
</head>
<body>
<h1>__TITLE__</h1>
<div id="pathway-graph" class="panel"></div>
<div id="metrics-graph" class="panel"></div>
<script>
  const GRAPH_FIGURE = __GRAPH_FIGURE__;
  const METRICS_FIGURE = __METRICS_FIGURE__;
  Plotly.newPlot('pathway-graph', GRAPH_FIGURE.data, GRAPH_FIGURE.layout, {responsive: true});
  Plotly.newPlot('metrics-graph', METRICS_FIGURE.data, METRICS_FIGURE.layout, {responsive: true});
</script>
</body>
</html>
"#;

/// Assemble the final page from the two serialized figure objects.
pub fn render_page(graph_figure_json: &str, metrics_figure_json: &str) -> String {
    PAGE_TEMPLATE
        .replace("__TITLE__", DASHBOARD_TITLE)
        .replace("__GRAPH_FIGURE__", graph_figure_json)
        .replace("__METRICS_FIGURE__", metrics_figure_json)
}
