use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::context::BotContext;

pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    context: Arc<BotContext>,
}

impl Handler {
    pub fn new(context: Arc<BotContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.context, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.context, ctx, message).await;
    }

    /// Called when an interaction is created
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.context, ctx, interaction).await;
    }
}
