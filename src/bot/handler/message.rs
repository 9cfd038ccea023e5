//! Message event handling.
//!
//! Every incoming message flows through here: bot authors are dropped, prefix
//! commands are dispatched, and the message is then handed to the moderation
//! router, which decides whether it needs AI screening.

use serenity::all::{ChannelType, Context, Message};
use std::sync::Arc;

use crate::commands;
use crate::context::BotContext;
use crate::moderation::{
    DiscordGateway, ModerationActionService, ModerationRequest, ModerationRouter,
};

/// Handles message creation in a channel.
///
/// Prefix commands run before moderation, so staff commands work even in
/// moderated channels. Moderation only looks at guild messages; DMs stop at
/// the request conversion.
pub async fn handle_message(context: &Arc<BotContext>, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    commands::dispatch(context, &ctx, &message).await;

    let Some(request) = ModerationRequest::from_message(&message) else {
        return;
    };

    let category_name = channel_category_name(&ctx, &message).await;

    let gateway = Arc::new(DiscordGateway::new(Arc::clone(&ctx.http)));
    let actions = ModerationActionService::new(
        gateway,
        Arc::clone(&context.cleanup),
        context.config.icon_url.clone(),
    );
    let router = ModerationRouter::new(Arc::clone(&context.classifier), actions);

    router.process(request, category_name.as_deref()).await;
}

/// Resolves the name of the category the message's channel sits under.
///
/// Returns `None` for channels outside a category and when either the channel
/// or its parent cannot be resolved.
async fn channel_category_name(ctx: &Context, message: &Message) -> Option<String> {
    let channel = match message.channel(ctx).await {
        Ok(channel) => channel,
        Err(e) => {
            tracing::warn!("Failed to resolve channel {}: {}", message.channel_id, e);
            return None;
        }
    };
    let parent_id = channel.guild()?.parent_id?;

    let parent = match parent_id.to_channel(ctx).await {
        Ok(parent) => parent,
        Err(e) => {
            tracing::warn!("Failed to resolve category {}: {}", parent_id, e);
            return None;
        }
    };
    let parent = parent.guild()?;
    (parent.kind == ChannelType::Category).then(|| parent.name)
}
