mod bot;
mod config;
mod platform;
mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::Bot;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bot::BotAdapter;
use crate::config::{Config, LISTEN_ADDR};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,relaybot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing token is fatal before anything binds
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    let adapter = Arc::new(BotAdapter::new(Bot::new(&config.bot_token)));
    adapter.initialize().await?;

    let app = server::router(adapter.clone());
    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR)
        .await
        .with_context(|| format!("Failed to bind to {LISTEN_ADDR}"))?;

    info!("Webhook server listening on http://{LISTEN_ADDR}/telegram");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Best-effort on the way out
    if let Err(e) = adapter.shutdown().await {
        warn!("Bot shutdown failed: {:#}", e);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
