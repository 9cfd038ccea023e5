//! Bot client construction and gateway startup.

use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::context::BotContext;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner.
///
/// Builds the serenity client around the shared context, publishes the shard
/// manager handle for the shutdown signal and `/version`, and then connects
/// to the gateway. Blocks until the connection ends.
///
/// # Arguments
/// - `context` - Shared bot state
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if client construction or the gateway connection fails
pub async fn start_bot(context: Arc<BotContext>) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(Arc::clone(&context));

    let mut client = Client::builder(&context.config.discord_token, intents)
        .event_handler(handler)
        .await?;

    if context
        .shard_manager
        .set(client.shard_manager.clone())
        .is_err()
    {
        tracing::warn!("Shard manager handle was already set");
    }

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
