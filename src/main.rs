use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;

mod config;
mod data;
mod views;
mod web;

use config::Config;
use web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let default_pair = config.default_pair();
    info!(
        "Comparison view defaults to {} vs {}",
        default_pair.team1, default_pair.team2
    );
    info!(
        "Serving {} predictions and a {}-quarter simulation",
        data::predictions().len(),
        data::quarters().len()
    );

    let app = web::router(AppState {
        default_pair,
        permissive_cors: config.permissive_cors,
    });
    let addr: SocketAddr = config.dashboard_addr.parse()?;
    info!("Dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run dashboard server (blocks until shutdown)
    axum::serve(listener, app).await?;

    Ok(())
}
