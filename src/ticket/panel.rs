//! Ticket panel components and button handling.

use serenity::all::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateInteractionResponse, CreateInteractionResponseMessage, EmojiId, ReactionType,
};

use crate::error::AppError;
use crate::ticket::{
    count_open_tickets, find_ticket_category, TicketKind, MAX_OPEN_TICKETS, ORDER_BUTTON_ID,
    SUPPORT_BUTTON_ID, TICKET_LIMIT_NOTICE,
};

const TERMS_CHANNEL_URL: &str =
    "https://discord.com/channels/1326998747841822740/1326998748315914250";

/// Builds the component row attached to the ticket panel.
pub fn panel_components() -> Vec<CreateActionRow> {
    let order = CreateButton::new(ORDER_BUTTON_ID)
        .label("Order")
        .style(ButtonStyle::Success)
        .emoji(ReactionType::Custom {
            animated: false,
            id: EmojiId::new(1352016456174272664),
            name: Some("cart".to_string()),
        });
    let support = CreateButton::new(SUPPORT_BUTTON_ID)
        .label("Support")
        .style(ButtonStyle::Secondary);
    let terms = CreateButton::new_link(TERMS_CHANNEL_URL).label("Terms of Service");

    vec![CreateActionRow::Buttons(vec![order, support, terms])]
}

/// Handles a press on one of the panel's ticket buttons.
///
/// Users at the open ticket limit get an ephemeral refusal; everyone else is
/// shown the modal for the requested ticket kind. The limit only applies when
/// the ticket category exists, since tickets are counted inside it.
pub async fn handle_panel_button(
    ctx: &Context,
    interaction: &ComponentInteraction,
    kind: TicketKind,
) -> Result<(), AppError> {
    let Some(guild_id) = interaction.guild_id else {
        return Ok(());
    };

    let channels = guild_id.channels(&ctx.http).await?;
    if let Some(category) = find_ticket_category(channels.values()) {
        let open = count_open_tickets(channels.values(), category, &interaction.user.name);
        if open >= MAX_OPEN_TICKETS {
            interaction
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .content(TICKET_LIMIT_NOTICE)
                            .ephemeral(true),
                    ),
                )
                .await?;
            return Ok(());
        }
    }

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Modal(kind.modal()))
        .await?;
    Ok(())
}
