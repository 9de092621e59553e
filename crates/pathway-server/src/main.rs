//! Voting Rights Pathway Dashboard server.
//!
//! Reads configuration from environment variables (see [`config::Config`]),
//! builds the event graph and its seeded layout once, renders the two-panel
//! page, then serves it over HTTP until SIGINT.
//!
//! ## Quick start
//!
//! ```bash
//! # Development (all interfaces, port 8050, info log)
//! cargo run --bin pathway-server --release
//!
//! # Custom config
//! PATHWAY_PORT=9090 \
//! PATHWAY_LAYOUT_SEED=7 \
//! PATHWAY_LOG_LEVEL=debug \
//!   cargo run --bin pathway-server --release
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use pathway_server::{Config, Dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Tracing ───────────────────────────────────────────────────────────
    let config = Config::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .compact()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host    = %config.host,
        port    = config.port,
        seed    = config.layout_seed,
        "pathway dashboard starting"
    );

    // ── One-time page assembly ────────────────────────────────────────────
    // Everything is computed here; requests only read the result.
    let dashboard = Dashboard::build(&config)?;
    info!(
        nodes = dashboard.node_count,
        edges = dashboard.edge_count,
        bytes = dashboard.page.len(),
        "dashboard page assembled"
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address {}:{}: {e}", config.host, config.port))?;

    let page = Arc::new(dashboard.page);

    // ── Serve ─────────────────────────────────────────────────────────────
    tokio::select! {
        result = pathway_server::dashboard::serve(page, addr) => {
            if let Err(e) = result {
                error!(error = %e, "dashboard server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received SIGINT — shutting down");
        }
    }

    info!("pathway dashboard shutdown complete");
    Ok(())
}
