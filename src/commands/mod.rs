//! Prefix and slash command handling.
//!
//! This module contains the bot's user-facing commands. Prefix commands are
//! plain chat messages starting with `-` and cover the staff and informational
//! surfaces (posting the ticket panel, the about embed, the rules and terms
//! listings). Slash commands live in the `slash` submodule and are registered
//! with Discord on startup.
//!
//! Prefix dispatch runs before moderation in the message handler, so staff
//! commands keep working inside moderated channels.

pub mod about;
pub mod cooldown;
pub mod rules;
pub mod send;
pub mod slash;
pub mod terms;

use serenity::all::{Colour, Context, Message};
use tokio::time::Duration;

use crate::context::BotContext;

/// Leading character that marks a message as a prefix command.
pub const COMMAND_PREFIX: char = '-';

/// Footer line shared by the branded embeds.
pub(crate) const BRAND_FOOTER: &str = "LuvoWeb • The Future of Freelance";

/// Background colour for the informational embeds.
pub(crate) const DARK_EMBED_COLOUR: Colour = Colour::from_rgb(48, 44, 52);

/// Pause between messages when a command sends a burst of embeds.
///
/// Discord rate limits rapid message bursts in a single channel.
pub(crate) const EMBED_SEND_DELAY: Duration = Duration::from_millis(500);

/// Dispatches a message to the prefix command it invokes, if any.
///
/// Messages that do not start with the command prefix, or whose first word is
/// not a known command, are ignored. Command failures are logged rather than
/// surfaced in the channel.
///
/// # Arguments
/// - `context` - Shared bot state
/// - `ctx` - Discord context for API calls
/// - `message` - The message that may contain a command
pub async fn dispatch(context: &BotContext, ctx: &Context, message: &Message) {
    let Some(rest) = message.content.strip_prefix(COMMAND_PREFIX) else {
        return;
    };
    let Some(name) = rest.split_whitespace().next() else {
        return;
    };

    let result = match name {
        "send" => send::handle_send(context, ctx, message).await,
        "embed" => about::handle_embed(context, ctx, message).await,
        "rules" => rules::handle_rules(context, ctx, message).await,
        "terms" => terms::handle_terms(context, ctx, message).await,
        _ => return,
    };

    if let Err(e) = result {
        tracing::error!("Prefix command '{}' failed: {}", name, e);
    }
}

/// Checks whether the message author holds administrator permissions.
///
/// The member is fetched through the cache or REST API and their permissions
/// computed from the cached guild. Fetch failures and uncached guilds count as
/// not an administrator.
pub(crate) async fn author_is_admin(ctx: &Context, message: &Message) -> bool {
    let Some(guild_id) = message.guild_id else {
        return false;
    };

    let member = match guild_id.member(ctx, message.author.id).await {
        Ok(member) => member,
        Err(e) => {
            tracing::warn!(
                "Failed to fetch member {} for permission check: {}",
                message.author.id,
                e
            );
            return false;
        }
    };

    let Some(guild) = message.guild(&ctx.cache) else {
        return false;
    };
    guild.member_permissions(&member).administrator()
}
