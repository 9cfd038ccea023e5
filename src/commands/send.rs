//! `-send` posts the persistent ticket panel.

use serenity::all::{Colour, Context, CreateEmbed, CreateMessage, Message};

use crate::commands::{author_is_admin, BRAND_FOOTER};
use crate::context::BotContext;
use crate::error::AppError;
use crate::ticket;
use crate::util::embed_footer;

const PANEL_COLOUR: Colour = Colour::from_rgb(66, 95, 71);
const PANEL_IMAGE_URL: &str = "https://i.imgur.com/RTh8LFv.png";

/// Posts the ticket panel in the current channel.
///
/// Administrator only. The panel carries the Order and Support buttons plus a
/// link to the Terms of Service channel; presses are routed to the ticket
/// module by the interaction handler.
pub async fn handle_send(
    context: &BotContext,
    ctx: &Context,
    message: &Message,
) -> Result<(), AppError> {
    if !author_is_admin(ctx, message).await {
        tracing::debug!("Ignoring -send from non-administrator {}", message.author.id);
        return Ok(());
    }

    let mut embed = CreateEmbed::new()
        .title("🎟️ Tickets")
        .description(concat!(
            "🛒 **Making a Purchase**\n",
            "> If you want to purchase any service or item, click the \"<:cart:1352016456174272664> Order\" button.\n\n",
            "<:user:1351969175001759755> **Need Help?**\n",
            "> For support, click the support button for assistance, fixes, or questions.\n\n",
            "📕 **Terms of Service**\n",
            "> Please review our Terms of Service before purchasing. We are not responsible for any misunderstandings.\n\n",
        ))
        .colour(PANEL_COLOUR)
        .footer(embed_footer(BRAND_FOOTER, &context.config.icon_url))
        .image(PANEL_IMAGE_URL);
    if !context.config.icon_url.is_empty() {
        embed = embed.thumbnail(context.config.icon_url.clone());
    }

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(embed)
                .components(ticket::panel::panel_components()),
        )
        .await?;
    Ok(())
}
