// ABOUTME: Server binary for the recipe dashboard
// ABOUTME: Loads configuration, initializes logging, and serves the dashboard over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Dashboard Server Binary
//!
//! Starts the HTTP server that renders the recipe dashboard and detail pages.

use anyhow::{Context, Result};
use clap::Parser;
use recipe_dashboard::{config::ServerConfig, logging, resources::ServerResources, routes};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "recipe-dashboard")]
#[command(about = "Recipe Dashboard - filter and inspect recipes from the Spoonacular API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the Spoonacular API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(base_url) = args.base_url {
        config.recipe_api.base_url = base_url;
        config.validate()?;
    }

    info!("Starting Recipe Dashboard");
    info!("{}", config.summary());

    let port = config.http_port;
    let app = routes::router(Arc::new(ServerResources::from_config(config)));

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {port}"))?;
    info!("Dashboard listening on http://0.0.0.0:{port}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Recipe Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
