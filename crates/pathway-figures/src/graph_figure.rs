use std::collections::HashMap;

use pathway_graph::PathwayGraph;
use pathway_layout::Position;

use crate::spec::{Axis, Figure, FigureLayout, Line, Margin, Marker, MarkerLine, Trace};

/// Marker color for a node polarity.
///
/// +1 → green (rights-expanding), −1 → red (rights-restricting), anything
/// else → gray. The gray branch is a deliberate defensive default for
/// undeclared polarity values; the fixed dataset never exercises it.
pub fn polarity_color(polarity: i8) -> &'static str {
    match polarity {
        1 => "green",
        -1 => "red",
        _ => "gray",
    }
}

/// Build the graph panel: one line trace for all edges, one marker+label
/// trace for all nodes.
///
/// Edges are thin uniform-colored segments with a `null` gap after each
/// pair of endpoints. Nodes are uniformly sized circles colored by
/// polarity, with the event name below the marker; hover shows the label
/// only. Missing positions fall back to the origin — they cannot occur
/// when `positions` came from a layout pass over the same graph.
pub fn build_graph_figure(
    graph: &PathwayGraph,
    positions: &HashMap<String, Position>,
) -> Figure {
    let origin = Position::new(0.0, 0.0);
    let at = |name: &str| positions.get(name).copied().unwrap_or(origin);

    // Edge trace: [x0, x1, null] per edge so Plotly breaks the line.
    let mut edge_x = Vec::with_capacity(graph.edge_count() * 3);
    let mut edge_y = Vec::with_capacity(graph.edge_count() * 3);
    for edge in graph.edges() {
        let (src, dst) = (at(&edge.from), at(&edge.to));
        edge_x.extend([Some(src.x), Some(dst.x), None]);
        edge_y.extend([Some(src.y), Some(dst.y), None]);
    }
    let edge_trace = Trace {
        hoverinfo: Some("none"),
        line: Some(Line { width: 1.0, color: "#888".to_string() }),
        ..Trace::new(edge_x, edge_y, "lines")
    };

    // Node trace: markers colored by polarity, labels below.
    let mut node_x = Vec::with_capacity(graph.node_count());
    let mut node_y = Vec::with_capacity(graph.node_count());
    let mut node_text = Vec::with_capacity(graph.node_count());
    let mut node_color = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let p = at(&node.name);
        node_x.push(Some(p.x));
        node_y.push(Some(p.y));
        node_text.push(node.name.clone());
        node_color.push(polarity_color(node.polarity).to_string());
    }
    let node_trace = Trace {
        text: Some(node_text),
        textposition: Some("bottom center"),
        hoverinfo: Some("text"),
        marker: Some(Marker {
            color: node_color,
            size: 20,
            showscale: false,
            line: MarkerLine { width: 2 },
        }),
        ..Trace::new(node_x, node_y, "markers+text")
    };

    Figure {
        data: vec![edge_trace, node_trace],
        layout: FigureLayout {
            showlegend: Some(false),
            hovermode: Some("closest"),
            margin: Some(Margin { b: 20, l: 5, r: 5, t: 40 }),
            xaxis: Some(Axis::hidden()),
            yaxis: Some(Axis::hidden()),
            ..FigureLayout::default()
        },
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
