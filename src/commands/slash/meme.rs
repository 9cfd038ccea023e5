//! `/meme` fetches a random meme.

use serde::Deserialize;
use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use tokio::time::Duration;

use crate::context::BotContext;
use crate::error::AppError;

const MEME_API_URL: &str = "https://meme-api.com/gimme/dankmemes";
const COOLDOWN: Duration = Duration::from_secs(7);

/// Post returned by the meme API.
///
/// `preview` lists renditions from smallest to largest; the last entry is the
/// full-size image.
#[derive(Debug, Deserialize)]
struct MemePost {
    title: String,
    ups: u64,
    preview: Vec<String>,
}

/// Runs the `/meme` command.
pub async fn run(
    context: &BotContext,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    if !super::pass_cooldown(context, ctx, interaction, "meme", COOLDOWN).await? {
        return Ok(());
    }

    let response = match fetch_meme(&context.http_client).await {
        Ok(post) => {
            let mut embed = CreateEmbed::new().title(post.title).footer(
                CreateEmbedFooter::new(format!("👍: {} | Luvo Freelance", post.ups)),
            );
            if let Some(preview) = post.preview.last() {
                embed = embed.image(preview);
            }
            CreateInteractionResponseMessage::new().embed(embed)
        }
        Err(e) => CreateInteractionResponseMessage::new()
            .content(format!("Error fetching meme: {}", e))
            .ephemeral(true),
    };

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;
    Ok(())
}

async fn fetch_meme(client: &reqwest::Client) -> Result<MemePost, reqwest::Error> {
    client
        .get(MEME_API_URL)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}
