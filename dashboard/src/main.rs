mod config;
mod cycle;
mod errors;
mod metrics;
mod model;
mod page;
mod rest;
mod view;
mod window;

use axum::{routing::get, Router};
use clap::Parser;
use config::Config;
use cycle::UpdateCycle;
use rest::AppError;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    info!("Starting sensor dashboard");
    info!("HTTP server: {}", config.http_addr);
    match config.seed {
        Some(seed) => info!("Simulation seed: {}", seed),
        None => info!("Simulation seed: entropy"),
    }

    if let Err(e) = metrics::init_metrics() {
        error!("Failed to register metrics: {}", e);
        std::process::exit(1);
    }

    // The window lives inside the cycle; viewers only see published snapshots
    let update_cycle = UpdateCycle::new(config.rng());
    info!(
        "Tick period: {:?}, window: {} points",
        config.tick_period(),
        update_cycle.window().capacity()
    );
    let (tx, rx) = watch::channel(Arc::new(update_cycle.view()));

    let ticker_handle = tokio::spawn(cycle::run_ticker(update_cycle, config.tick_period(), tx));

    let app = Router::new()
        .route("/metrics", get(metrics_handler))
        .merge(rest::create_router(rx));

    let listener = match bind(&config.http_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.http_addr, e);
            std::process::exit(1);
        }
    };

    info!("HTTP server listening on {}", config.http_addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap_or_else(|e| {
            error!("HTTP server error: {}", e);
        });
    });

    tokio::select! {
        _ = ticker_handle => {
            error!("Update cycle terminated");
        }
        _ = server_handle => {
            error!("HTTP server terminated");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Shutting down");
}

async fn metrics_handler() -> Result<String, AppError> {
    Ok(metrics::gather_metrics()?)
}

async fn bind(addr: &str) -> errors::Result<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}
