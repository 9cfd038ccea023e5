//! Ticket channel creation from modal submissions.

use serenity::all::{
    ActionRowComponent, ChannelType, Context, CreateChannel, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, Mentionable,
    ModalInteraction, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, Timestamp,
};

use crate::error::AppError;
use crate::ticket::close;
use crate::ticket::{
    find_ticket_category, TicketKind, BUDGET_INPUT_ID, PROJECT_DETAILS_INPUT_ID,
    SUPPORT_DETAILS_INPUT_ID, TICKET_CATEGORY,
};
use crate::util::EMBED_GREEN;

/// Creates a ticket channel from a submitted order or support modal.
///
/// The channel is created under the ticket category, hidden from the guild at
/// large and opened to the creator. The opening message pings the team,
/// carries the submitted details, and is pinned together with the close
/// button.
pub async fn handle_modal(
    ctx: &Context,
    interaction: &ModalInteraction,
    kind: TicketKind,
) -> Result<(), AppError> {
    let Some(guild_id) = interaction.guild_id else {
        return Ok(());
    };
    let user = &interaction.user;

    let channels = guild_id.channels(&ctx.http).await?;
    let category = find_ticket_category(channels.values());
    if category.is_none() {
        tracing::warn!(
            "Ticket category '{}' not found, creating the ticket at the guild root",
            TICKET_CATEGORY
        );
    }

    // The @everyone role shares the guild's id.
    let overwrites = vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
        PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(user.id),
        },
    ];

    let mut builder = CreateChannel::new(kind.channel_name(&user.name))
        .kind(ChannelType::Text)
        .permissions(overwrites);
    if let Some(category) = category {
        builder = builder.category(category);
    }
    let ticket_channel = guild_id.create_channel(&ctx.http, builder).await?;

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(
                        CreateEmbed::new()
                            .description(format!(
                                "Your ticket has been created in {}",
                                ticket_channel.id.mention()
                            ))
                            .colour(EMBED_GREEN),
                    )
                    .ephemeral(true),
            ),
        )
        .await?;

    let opening = ticket_channel
        .id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .content("@everyone")
                .embed(request_embed(interaction, kind))
                .components(close::close_components()),
        )
        .await?;
    opening.pin(&ctx.http).await?;

    ticket_channel
        .id
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(
                CreateEmbed::new()
                    .title("<:check_yes:1351969576669151304> Request Submitted")
                    .description("Please wait while our team reviews your request.")
                    .colour(EMBED_GREEN)
                    .timestamp(Timestamp::now()),
            ),
        )
        .await?;
    Ok(())
}

/// Builds the opening embed from the modal's submitted values.
fn request_embed(interaction: &ModalInteraction, kind: TicketKind) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .colour(EMBED_GREEN)
        .timestamp(Timestamp::now())
        .thumbnail(interaction.user.face());

    match kind {
        TicketKind::Order => embed
            .title("New Commission Request")
            .field(
                "Project Details",
                format!("```{}```", input_value(interaction, PROJECT_DETAILS_INPUT_ID)),
                false,
            )
            .field(
                "Budget",
                format!("```{}```", input_value(interaction, BUDGET_INPUT_ID)),
                true,
            )
            .field(
                "Submitted by",
                format!("```{}```", interaction.user.name),
                true,
            ),
        TicketKind::Support => embed
            .title("<:user:1351969175001759755> New Support Request")
            .description(format!(
                "<:dot:996804674252439733> **Description:**\n> {}",
                input_value(interaction, SUPPORT_DETAILS_INPUT_ID)
            )),
    }
}

/// Reads a text input's submitted value out of the modal data.
fn input_value<'a>(interaction: &'a ModalInteraction, custom_id: &str) -> &'a str {
    interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.as_deref()
            }
            _ => None,
        })
        .unwrap_or("")
}
