// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sift_agent::app::{create_router, AppState, AGENT_NAME, VERSION};
use sift_agent::models::config::Config;
use sift_agent::services::crawler::CrawlClient;
use sift_agent::services::logging;
use sift_agent::services::search::SearchClient;
use tracing::info;

/// Search-and-crawl digest agent.
#[derive(Parser)]
#[command(name = "sift-agent", version = VERSION)]
struct Cli {
    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env().context("failed to load configuration")?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = Arc::new(config);
    let search_client = Arc::new(SearchClient::new(
        config.searxng.clone(),
        config.user_agent.clone(),
    )?);
    let crawl_client = Arc::new(CrawlClient::new(
        config.crawler.clone(),
        config.user_agent.clone(),
    )?);

    let state = AppState {
        config: config.clone(),
        search_client,
        crawl_client,
    };
    let app = create_router(state);

    // Bind address comes from API_HOST/API_PORT (0.0.0.0 for Docker).
    let addr = config.api.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        searxng = %config.searxng.endpoint(),
        "{AGENT_NAME} v{VERSION} listening on {addr}"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
