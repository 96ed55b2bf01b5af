// ABOUTME: HTTP server binary for the Runyear dashboard API
// ABOUTME: Loads configuration, initializes logging, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runyear Contributors

//! # Runyear Server Binary
//!
//! Serves the dashboard API described in the crate docs. Configuration comes
//! from environment variables; `--http-port` overrides `HTTP_PORT`.

use anyhow::Result;
use clap::Parser;
use runyear::{
    config::environment::ServerConfig, logging, resources::ServerResources, routes::build_router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "runyear-server")]
#[command(about = "Runyear - yearly distance goal dashboard API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Runyear dashboard API");
    info!("{}", config.summary());

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(config));
    let app = build_router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    display_available_endpoints(port);
    info!("Server listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  http://{host}:{port}/health");
    info!("   Strava Authorize:  GET  http://{host}:{port}/api/auth/strava");
    info!("   Strava Callback:   GET  http://{host}:{port}/api/auth/strava/callback");
    info!("   Activities:        GET  http://{host}:{port}/api/strava/activities");
    info!("   Athlete Stats:     GET  http://{host}:{port}/api/strava/stats");
    info!("   Historical:        GET  http://{host}:{port}/api/strava/historical");
    info!("   Pace Analysis:     GET  http://{host}:{port}/api/strava/pace-analysis");
    info!("=== End of Endpoint List ===");
}
