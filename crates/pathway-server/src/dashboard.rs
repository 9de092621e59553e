//! Dashboard assembly and the HTTP surface.
//!
//! [`Dashboard::build`] is the explicit startup function: it constructs the
//! event graph, runs the seeded layout, builds both figures and renders the
//! page exactly once. The HTTP layer then serves that immutable page to
//! every request — one route, no API, no per-request computation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use tracing::info;

use pathway_figures::{build_graph_figure, build_metrics_figure};
use pathway_graph::PathwayGraph;
use pathway_layout::{spring_layout, LayoutConfig};

use crate::config::Config;
use crate::dataset;
use crate::html;

// ─────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────

/// The precomputed dashboard: the rendered page plus startup diagnostics.
/// Immutable after construction; shared across requests via [`Arc`].
#[derive(Debug)]
pub struct Dashboard {
    /// The complete HTML page served at `/`.
    pub page: String,

    pub node_count: usize,
    pub edge_count: usize,
}

impl Dashboard {
    /// Build the whole dashboard from the compiled-in dataset.
    ///
    /// Any failure here is a programming error in the declaration lists
    /// and fatal at startup — there is no runtime recovery path because
    /// there is no runtime input.
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let graph = PathwayGraph::build(&dataset::events(), &dataset::causal_edges())?;

        let layout_cfg = LayoutConfig {
            seed: config.layout_seed,
            iterations: config.layout_iterations,
            ..LayoutConfig::default()
        };
        let positions = spring_layout(&graph, &layout_cfg);

        let graph_figure = build_graph_figure(&graph, &positions);
        let metrics_figure = build_metrics_figure(&dataset::metric_rows());

        let page = html::render_page(
            &serde_json::to_string(&graph_figure)?,
            &serde_json::to_string(&metrics_figure)?,
        );

        Ok(Self {
            page,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
        })
    }
}

// ─────────────────────────────────────────────
// HTTP surface
// ─────────────────────────────────────────────

/// Router with the single dashboard route. The page is captured as shared
/// state rather than read from a process-wide global.
pub fn router(page: Arc<String>) -> Router {
    Router::new()
        .route("/", get(root))
        .layer(CorsLayer::permissive())
        .with_state(page)
}

async fn root(State(page): State<Arc<String>>) -> Html<String> {
    Html(page.as_ref().clone())
}

/// Bind and serve until the task is cancelled. A bind failure surfaces as
/// a fatal startup error.
pub async fn serve(page: Arc<String>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind dashboard address {addr}: {e}"))?;

    info!(%addr, "dashboard listening");
    axum::serve(listener, router(page)).await?;
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
