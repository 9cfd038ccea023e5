//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot
//! successfully connects to Discord's gateway and completes the initial
//! handshake. This is the first event received after authentication and
//! indicates the bot is ready to process other events.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Set the bot's activity status
//! - Sync slash commands with Discord

use serenity::all::{ActivityData, Context, Ready};

use crate::commands::slash;
use crate::context::BotContext;

/// Handles the ready event when the bot connects to Discord.
///
/// Sets the activity status and registers the slash commands. A failed
/// command sync is logged but does not bring the bot down; prefix commands
/// and moderation keep working without it.
///
/// # Arguments
/// - `context` - Shared bot state
/// - `ctx` - Discord context for API calls
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(context: &BotContext, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("The Future of Freelance")));

    if let Err(e) = slash::register(context, &ctx).await {
        tracing::error!("Failed to sync slash commands: {}", e);
    }
}
