//! Discord side of the moderation pipeline.
//!
//! The action steps talk to Discord through [`ModerationGateway`] so the
//! pipeline can be exercised in tests with an in-memory fake. The production
//! implementation wraps the Serenity HTTP client and folds the two error
//! responses the pipeline reacts to, 404 and 403, into dedicated variants.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateMessage, GuildId, MessageId, RoleId, UserId},
    async_trait,
    http::{Http, HttpError},
};
use thiserror::Error;

/// Error from a single gateway operation.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The target no longer exists, usually an already deleted message.
    #[error("not found")]
    NotFound,

    /// The bot lacks permission for the operation, including closed DMs.
    #[error("missing permission")]
    MissingPermission,

    /// Any other Discord API error.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Api(Box<serenity::Error>),
}

impl From<serenity::Error> for GatewayError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(ref response)) = err {
            match response.status_code.as_u16() {
                404 => return GatewayError::NotFound,
                403 => return GatewayError::MissingPermission,
                _ => {}
            }
        }

        GatewayError::Api(Box::new(err))
    }
}

/// Discord operations performed while applying a verdict.
#[async_trait]
pub trait ModerationGateway: Send + Sync {
    /// Posts a message and returns the id it was assigned.
    async fn post_message(
        &self,
        channel: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, GatewayError>;

    /// Deletes a message from a channel.
    async fn delete_message(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<(), GatewayError>;

    /// Looks up a guild role by exact name.
    async fn role_by_name(
        &self,
        guild: GuildId,
        name: &str,
    ) -> Result<Option<RoleId>, GatewayError>;

    /// Adds a role to a guild member.
    async fn assign_role(
        &self,
        guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> Result<(), GatewayError>;

    /// Sends a direct message to a user.
    async fn direct_message(&self, user: UserId, message: CreateMessage)
        -> Result<(), GatewayError>;
}

/// Production gateway backed by the Serenity HTTP client.
pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ModerationGateway for DiscordGateway {
    async fn post_message(
        &self,
        channel: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, GatewayError> {
        let sent = channel.send_message(&self.http, message).await?;
        Ok(sent.id)
    }

    async fn delete_message(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<(), GatewayError> {
        channel.delete_message(&self.http, message).await?;
        Ok(())
    }

    async fn role_by_name(
        &self,
        guild: GuildId,
        name: &str,
    ) -> Result<Option<RoleId>, GatewayError> {
        let roles = self.http.get_guild_roles(guild).await?;
        Ok(roles.iter().find(|role| role.name == name).map(|role| role.id))
    }

    async fn assign_role(
        &self,
        guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> Result<(), GatewayError> {
        self.http
            .add_member_role(guild, user, role, Some("Violated community guidelines"))
            .await?;
        Ok(())
    }

    async fn direct_message(
        &self,
        user: UserId,
        message: CreateMessage,
    ) -> Result<(), GatewayError> {
        let dm_channel = user.create_dm_channel(&self.http).await?;
        dm_channel.id.send_message(&self.http, message).await?;
        Ok(())
    }
}
