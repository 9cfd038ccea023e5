use serenity::all::{ChannelId, GuildId, Mentionable, Message, MessageId, UserId};

/// Immutable snapshot of one inbound message handed to the moderation
/// pipeline.
///
/// Carries everything the classifier and the action steps need so that later
/// steps never reach back into gateway state that may have changed since the
/// message arrived.
#[derive(Debug, Clone)]
pub struct ModerationRequest {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub author_id: UserId,
    /// Author rendered as `name#discriminator`, or just the name for
    /// accounts without a discriminator.
    pub author_tag: String,
    pub author_mention: String,
    pub author_avatar_url: String,
    pub channel_mention: String,
    pub content: String,
    /// Unix timestamp of the original send time, used in audit embeds.
    pub sent_at_unix: i64,
}

impl ModerationRequest {
    /// Captures the moderation-relevant fields of a guild message.
    ///
    /// # Arguments
    /// - `message` - The gateway message event payload
    ///
    /// # Returns
    /// - `Some(ModerationRequest)` - For messages sent inside a guild
    /// - `None` - For direct messages, which are never moderated
    pub fn from_message(message: &Message) -> Option<Self> {
        let guild_id = message.guild_id?;

        Some(Self {
            guild_id,
            channel_id: message.channel_id,
            message_id: message.id,
            author_id: message.author.id,
            author_tag: message.author.tag(),
            author_mention: message.author.mention().to_string(),
            author_avatar_url: message.author.face(),
            channel_mention: message.channel_id.mention().to_string(),
            content: message.content.clone(),
            sent_at_unix: message.timestamp.unix_timestamp(),
        })
    }
}
