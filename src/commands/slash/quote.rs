//! `/quote` fetches an inspirational quote.

use serde::Deserialize;
use serenity::all::{
    Colour, CommandInteraction, Context, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};
use tokio::time::Duration;

use crate::context::BotContext;
use crate::error::AppError;

const QUOTE_API_URL: &str = "https://zenquotes.io/api/random";
const COOLDOWN: Duration = Duration::from_secs(4);

/// Quote entry as returned by the zenquotes API.
#[derive(Debug, Deserialize)]
struct Quote {
    /// Quote text.
    q: String,
    /// Author attribution.
    a: String,
}

/// Runs the `/quote` command.
pub async fn run(
    context: &BotContext,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    if !super::pass_cooldown(context, ctx, interaction, "quote", COOLDOWN).await? {
        return Ok(());
    }

    let response = match fetch_quote(&context.http_client).await {
        Ok(Some(quote)) => {
            let embed = CreateEmbed::new()
                .description(format!("{} - {}", quote.q, quote.a))
                .colour(Colour::BLUE)
                .footer(CreateEmbedFooter::new(format!(
                    "Command executed by {} | Luvo Freelance",
                    interaction.user.name
                )))
                .thumbnail(interaction.user.face());
            CreateInteractionResponseMessage::new().embed(embed)
        }
        Ok(None) => CreateInteractionResponseMessage::new()
            .content("Error fetching quote: empty response")
            .ephemeral(true),
        Err(e) => CreateInteractionResponseMessage::new()
            .content(format!("Error fetching quote: {}", e))
            .ephemeral(true),
    };

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;
    Ok(())
}

async fn fetch_quote(client: &reqwest::Client) -> Result<Option<Quote>, reqwest::Error> {
    let quotes: Vec<Quote> = client
        .get(QUOTE_API_URL)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(quotes.into_iter().next())
}
