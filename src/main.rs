//! LuvoBot: community bot for the LuvoWeb Discord server.
//!
//! The bot posts the ticket panel and informational embeds, serves a handful
//! of slash commands, and screens community channels through an AI
//! moderation pipeline. See the module docs for the individual layers:
//!
//! - `bot` - Gateway connection and event handlers
//! - `commands` - Prefix and slash commands
//! - `ticket` - Order and support ticket system
//! - `moderation` - AI message screening and enforcement

mod bot;
mod commands;
mod config;
mod context;
mod error;
mod moderation;
mod ticket;
mod util;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::context::BotContext;
use crate::error::AppError;
use crate::moderation::classifier::REQUEST_TIMEOUT;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    // One client serves the completion API and the meme/quote commands.
    let http_client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let context = Arc::new(BotContext::new(config, http_client));

    let signal_context = Arc::clone(&context);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::error!("Failed to listen for shutdown signal");
            return;
        }
        tracing::info!("Shutdown signal received");
        if let Some(shard_manager) = signal_context.shard_manager.get() {
            shard_manager.shutdown_all().await;
        }
    });

    bot::start::start_bot(Arc::clone(&context)).await?;

    // Pending notice deletions do not outlive the gateway connection.
    context.cleanup.shutdown().await;

    Ok(())
}
