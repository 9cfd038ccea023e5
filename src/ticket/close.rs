//! Ticket closure with confirmation and transcript upload.

use serenity::all::{
    ButtonStyle, Colour, ComponentInteraction, Context, CreateActionRow, CreateAttachment,
    CreateButton, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, GetMessages,
};

use crate::context::BotContext;
use crate::error::AppError;
use crate::ticket::transcript;
use crate::ticket::{CANCEL_CLOSE_ID, CLOSE_BUTTON_ID, CONFIRM_CLOSE_ID};

/// Messages fetched for the transcript when a ticket closes.
const TRANSCRIPT_MESSAGE_LIMIT: u8 = 100;

/// Builds the close button row pinned with the ticket's opening message.
pub fn close_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![CreateButton::new(
        CLOSE_BUTTON_ID,
    )
    .label("Close")
    .style(ButtonStyle::Secondary)
    .emoji('🔒')])]
}

/// Handles a press on the ticket's close button.
///
/// Administrators are asked to confirm; everyone else gets an ephemeral
/// refusal.
pub async fn handle_close_button(
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let is_admin = interaction
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());

    if !is_admin {
        let refusal = CreateEmbed::new()
            .title("<a:alert:1351969965233934466> No Permission")
            .description(
                "You cannot close this ticket. If you created it by mistake, please contact a staff member.",
            );
        interaction
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .embed(refusal)
                        .ephemeral(true),
                ),
            )
            .await?;
        return Ok(());
    }

    let confirm = CreateEmbed::new()
        .title("Confirm Ticket Closure")
        .description("Are you sure you want to close this ticket? This action cannot be undone.")
        .colour(Colour::RED);
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(confirm)
                    .components(confirm_components()),
            ),
        )
        .await?;
    Ok(())
}

fn confirm_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(CONFIRM_CLOSE_ID)
            .label("Yes")
            .style(ButtonStyle::Danger),
        CreateButton::new(CANCEL_CLOSE_ID)
            .label("No")
            .style(ButtonStyle::Secondary),
    ])]
}

/// Handles a confirmed ticket closure.
///
/// Announces the closure in the channel, renders the message history as an
/// HTML transcript to the configured log channel, and deletes the channel.
/// When the transcript upload fails the channel is left in place so the
/// history is not lost.
pub async fn handle_confirm(
    context: &BotContext,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    dismiss_confirmation(ctx, interaction).await;

    let channel_id = interaction.channel_id;
    channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(
                CreateEmbed::new().description("<a:alert:1351969965233934466> Closing ticket..."),
            ),
        )
        .await?;

    let messages = channel_id
        .messages(&ctx.http, GetMessages::new().limit(TRANSCRIPT_MESSAGE_LIMIT))
        .await?;

    if let Some(log_channel) = context.config.log_channel {
        let html = transcript::render(&messages, &context.config.transcript_css);
        let attachment = CreateAttachment::bytes(html.into_bytes(), "transcript.html");
        log_channel
            .send_message(&ctx.http, CreateMessage::new().add_file(attachment))
            .await?;
    }

    channel_id.delete(&ctx.http).await?;
    Ok(())
}

/// Handles a cancelled ticket closure.
pub async fn handle_cancel(ctx: &Context, interaction: &ComponentInteraction) -> Result<(), AppError> {
    dismiss_confirmation(ctx, interaction).await;
    Ok(())
}

/// Removes the confirmation prompt and acknowledges its interaction.
///
/// Both halves tolerate failure: the prompt may already be gone, and the
/// acknowledgement races against the deletion of the message it belongs to.
async fn dismiss_confirmation(ctx: &Context, interaction: &ComponentInteraction) {
    if let Err(e) = interaction.message.delete(&ctx.http).await {
        tracing::debug!("Failed to delete close confirmation message: {}", e);
    }
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
    {
        tracing::debug!("Failed to acknowledge close confirmation: {}", e);
    }
}
