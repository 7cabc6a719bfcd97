// Main entry point for the MCP crawler server

mod tools;

use anyhow::{Context, Result};
use applyhome_crawler::CrawlerConfig;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::tools::CrawlerService;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol; all logging goes to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,applyhome_crawler=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CrawlerConfig::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let service = CrawlerService::new(&config).context("Failed to build crawler service")?;

    tracing::info!("Starting MCP server on stdio");
    let server = service
        .serve(stdio())
        .await
        .context("Failed to start MCP server")?;
    server
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;

    Ok(())
}
