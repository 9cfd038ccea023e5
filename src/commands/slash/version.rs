//! `/version` reports build and connection information.

use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use tokio::time::Duration;

use crate::context::BotContext;
use crate::error::AppError;
use crate::util::EMBED_GREEN;

/// Runs the `/version` command.
pub async fn run(
    context: &BotContext,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let latency = match shard_latency(context, ctx).await {
        Some(latency) => format!("```{:.2}ms```", latency.as_secs_f64() * 1000.0),
        None => "```n/a```".to_string(),
    };

    let mut embed = CreateEmbed::new()
        .title("About LuvoBot")
        .colour(EMBED_GREEN)
        .field("Language", "```Rust```", true)
        .field("Main Library", "```serenity```", true)
        .field("Developer", "```@siddharthz```", true)
        .field("Latency", latency, true)
        .footer(CreateEmbedFooter::new("LuvoWeb Freelance"));
    if !context.config.icon_url.is_empty() {
        embed = embed.thumbnail(context.config.icon_url.clone());
    }

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;
    Ok(())
}

/// Reads the current shard's gateway heartbeat latency.
///
/// The latency is unknown until the first heartbeat acknowledgement, and the
/// shard manager slot is empty in the window before startup completes.
async fn shard_latency(context: &BotContext, ctx: &Context) -> Option<Duration> {
    let manager = context.shard_manager.get()?;
    let runners = manager.runners.lock().await;
    runners.get(&ctx.shard_id).and_then(|runner| runner.latency)
}
