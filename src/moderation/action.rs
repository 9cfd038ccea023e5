//! Side-effecting moderation actions.
//!
//! Applies a verdict to the offending message through the moderation
//! gateway. Every sub-step is best effort: a failure is logged and the
//! remaining steps still run, so a missing audit channel can never stop the
//! message itself from being removed.

use std::sync::Arc;
use std::time::Duration;

use serenity::all::{
    ChannelId, Colour, CreateEmbed, CreateMessage, Mentionable, MessageId, Timestamp, UserId,
};

use crate::moderation::cleanup::NoticeCleanup;
use crate::moderation::gateway::{GatewayError, ModerationGateway};
use crate::moderation::request::ModerationRequest;
use crate::moderation::verdict::Verdict;
use crate::util::{embed_footer, truncate_with_ellipsis};

/// Channel receiving deletion audit embeds.
const DELETION_LOG_CHANNEL: ChannelId = ChannelId::new(1352513103333560340);
/// Channel receiving potential-lead alerts.
const LEAD_CHANNEL: ChannelId = ChannelId::new(1352511817376731187);
/// Channel clients are pointed at for opening a ticket.
const TICKET_REQUEST_CHANNEL: ChannelId = ChannelId::new(1326998748315914247);
/// Staff member pinged on lead alerts and named in redirect notices.
const STAFF_CONTACT: UserId = UserId::new(273352781442842624);

const MUTED_ROLE_NAME: &str = "Muted";
const CONTENT_PREVIEW_LIMIT: usize = 1000;

/// How long a redirect notice stays up before it is removed.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(300);

const LEAD_EMBED_COLOUR: Colour = Colour::from_rgb(66, 95, 71);

const MUTE_NOTICE: &str = "Your message was removed and you have been muted now because it \
    violated our community guidelines. Please refrain from posting promotional or advertisement \
    content in our server.";

/// How a best-effort moderation sub-step ended.
enum StepStatus {
    Done,
    Skipped(&'static str),
}

/// Executes verdict side effects against Discord.
pub struct ModerationActionService {
    gateway: Arc<dyn ModerationGateway>,
    cleanup: Arc<NoticeCleanup>,
    icon_url: String,
}

impl ModerationActionService {
    pub fn new(
        gateway: Arc<dyn ModerationGateway>,
        cleanup: Arc<NoticeCleanup>,
        icon_url: String,
    ) -> Self {
        Self {
            gateway,
            cleanup,
            icon_url,
        }
    }

    /// Applies the verdict for one message.
    ///
    /// Allow is a no-op. Delete and Redirect run their sub-steps in order,
    /// each isolated so one failure cannot block the rest.
    pub async fn apply(&self, verdict: Verdict, request: &ModerationRequest) {
        match verdict {
            Verdict::Delete => self.apply_delete(request).await,
            Verdict::Redirect => self.apply_redirect(request).await,
            Verdict::Allow => {}
        }
    }

    /// Removes a rule-breaking message and mutes its author.
    ///
    /// Steps, in order: audit embed to the deletion log channel, delete the
    /// message, add the Muted role, DM the author. The DM is attempted even
    /// when muting failed so the author still learns what happened.
    async fn apply_delete(&self, request: &ModerationRequest) {
        log_step(request, "deletion audit", self.post_deletion_audit(request).await);
        log_step(request, "message delete", self.delete_original(request).await);
        log_step(request, "mute", self.mute_author(request).await);
        log_step(request, "mute notice", self.send_mute_notice(request).await);
    }

    /// Points a prospective client at the ticket channel.
    ///
    /// Posts the public redirect notice, alerts staff in the lead channel,
    /// deletes the original message, and schedules the notice itself for
    /// deletion once its lifetime expires.
    async fn apply_redirect(&self, request: &ModerationRequest) {
        let notice_id = match self.post_redirect_notice(request).await {
            Ok(id) => {
                log_step(request, "redirect notice", Ok(StepStatus::Done));
                Some(id)
            }
            Err(e) => {
                log_step(request, "redirect notice", Err(e));
                None
            }
        };

        log_step(request, "lead alert", self.post_lead_alert(request).await);
        log_step(request, "message delete", self.delete_original(request).await);

        if let Some(notice_id) = notice_id {
            self.cleanup
                .schedule(
                    Arc::clone(&self.gateway),
                    request.channel_id,
                    notice_id,
                    NOTICE_LIFETIME,
                )
                .await;
        }
    }

    async fn post_deletion_audit(
        &self,
        request: &ModerationRequest,
    ) -> Result<StepStatus, GatewayError> {
        let embed = self
            .audit_embed(request, "Deleted Message")
            .title("🚫 Message Deleted - Rule Violation")
            .description(format!(
                "A message by {} in {} was deleted for violating community guidelines.",
                request.author_mention, request.channel_mention
            ))
            .colour(Colour::RED)
            .footer(embed_footer("LuvoWeb • Moderation Alert", &self.icon_url));

        self.gateway
            .post_message(DELETION_LOG_CHANNEL, CreateMessage::new().embed(embed))
            .await?;
        Ok(StepStatus::Done)
    }

    async fn delete_original(
        &self,
        request: &ModerationRequest,
    ) -> Result<StepStatus, GatewayError> {
        self.gateway
            .delete_message(request.channel_id, request.message_id)
            .await?;
        Ok(StepStatus::Done)
    }

    async fn mute_author(&self, request: &ModerationRequest) -> Result<StepStatus, GatewayError> {
        let Some(role) = self
            .gateway
            .role_by_name(request.guild_id, MUTED_ROLE_NAME)
            .await?
        else {
            return Ok(StepStatus::Skipped("Muted role not found"));
        };

        self.gateway
            .assign_role(request.guild_id, request.author_id, role)
            .await?;
        Ok(StepStatus::Done)
    }

    async fn send_mute_notice(
        &self,
        request: &ModerationRequest,
    ) -> Result<StepStatus, GatewayError> {
        self.gateway
            .direct_message(request.author_id, CreateMessage::new().content(MUTE_NOTICE))
            .await?;
        Ok(StepStatus::Done)
    }

    async fn post_redirect_notice(
        &self,
        request: &ModerationRequest,
    ) -> Result<MessageId, GatewayError> {
        let notice = format!(
            "{}, it seems you're looking for services. Please message {} directly or open a \
             ticket in {} for assistance.",
            request.author_mention,
            STAFF_CONTACT.mention(),
            TICKET_REQUEST_CHANNEL.mention()
        );

        self.gateway
            .post_message(request.channel_id, CreateMessage::new().content(notice))
            .await
    }

    async fn post_lead_alert(
        &self,
        request: &ModerationRequest,
    ) -> Result<StepStatus, GatewayError> {
        let embed = self
            .audit_embed(request, "Original Message")
            .title("💼 Potential Client Detected")
            .description(format!(
                "A user appears to be looking for services in {}",
                request.channel_mention
            ))
            .colour(LEAD_EMBED_COLOUR)
            .footer(embed_footer("LuvoWeb • Potential Lead Alert", &self.icon_url));

        let message = CreateMessage::new()
            .content(STAFF_CONTACT.mention().to_string())
            .embed(embed);

        self.gateway.post_message(LEAD_CHANNEL, message).await?;
        Ok(StepStatus::Done)
    }

    /// Audit fields shared by the deletion and lead embeds: author, send
    /// time, and truncated message content.
    fn audit_embed(&self, request: &ModerationRequest, content_field: &str) -> CreateEmbed {
        CreateEmbed::new()
            .field(
                "User",
                format!("{} (`{}`)", request.author_mention, request.author_tag),
                true,
            )
            .field("Sent at", format!("<t:{}:F>", request.sent_at_unix), true)
            .field(
                content_field,
                format!(
                    "```{}```",
                    truncate_with_ellipsis(&request.content, CONTENT_PREVIEW_LIMIT)
                ),
                false,
            )
            .thumbnail(request.author_avatar_url.clone())
            .timestamp(Timestamp::now())
    }
}

/// Uniform logging for moderation sub-steps.
fn log_step(request: &ModerationRequest, step: &str, outcome: Result<StepStatus, GatewayError>) {
    match outcome {
        Ok(StepStatus::Done) => {
            tracing::debug!("Message {}: step '{}' completed", request.message_id, step)
        }
        Ok(StepStatus::Skipped(reason)) => {
            tracing::warn!(
                "Message {}: step '{}' skipped: {}",
                request.message_id,
                step,
                reason
            )
        }
        Err(e) => {
            tracing::error!("Message {}: step '{}' failed: {}", request.message_id, step, e)
        }
    }
}
