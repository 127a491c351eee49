//! cachelab demo server.
//!
//! Serves a set of pages that visualize four cache layers (data cache,
//! request memoization, full-route snapshot, router segment cache) and four
//! rendering strategies (static, dynamic, streaming, partial), plus the
//! `/api/demo-data` endpoint the pages poke at. Reload a page, watch the
//! timestamps and hit/miss labels move.

mod api;
mod pages;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use cachelab_core::ServerConfig;
use state::AppState;

/// cachelab - cache-layer and rendering-strategy demo server
#[derive(Parser)]
#[command(name = "cachelab-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Base URL the pages print for the demo API endpoint
    /// (overrides the CACHELAB_BASE_URL environment variable)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ServerConfig::resolve(cli.port, cli.base_url);
    let addr = config.bind_addr();

    let state = Arc::new(AppState::new(config));
    let app = routes::router(state);

    tracing::info!(%addr, "cachelab server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
