//! Slash command registration and dispatch.
//!
//! Commands are registered on startup, against the configured guild when one
//! is set (changes show up immediately) or globally otherwise (propagation can
//! take up to an hour). Dispatch routes incoming command interactions by name;
//! the rate-limited commands gate themselves through `pass_cooldown`, which
//! answers throttled users with an ephemeral retry notice.

pub mod ask;
pub mod meme;
pub mod quote;
pub mod version;

use serenity::all::{
    Colour, Command, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use tokio::time::Duration;

use crate::context::BotContext;
use crate::error::AppError;

const COOLDOWN_COLOUR: Colour = Colour::from_rgb(21, 116, 0);

/// Registers the bot's slash commands with Discord.
pub async fn register(context: &BotContext, ctx: &Context) -> Result<(), AppError> {
    let commands = vec![
        CreateCommand::new("meme").description("Shows a random meme"),
        CreateCommand::new("quote").description("Gives an inspirational quote"),
        CreateCommand::new("version").description("Shows bot version information"),
        CreateCommand::new("ask")
            .description("Ask a question to our AI assistant")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "question",
                    "The question to ask",
                )
                .required(true),
            ),
    ];

    match context.config.guild_id {
        Some(guild_id) => {
            guild_id.set_commands(&ctx.http, commands).await?;
            tracing::info!("Slash commands synced to guild {}", guild_id);
        }
        None => {
            Command::set_global_commands(&ctx.http, commands).await?;
            tracing::info!("Slash commands synced globally");
        }
    }
    Ok(())
}

/// Dispatches a command interaction to its handler by name.
///
/// Failures are logged; the user sees Discord's own "interaction failed"
/// notice when a handler errors before responding.
pub async fn dispatch(context: &BotContext, ctx: &Context, interaction: &CommandInteraction) {
    let result = match interaction.data.name.as_str() {
        "meme" => meme::run(context, ctx, interaction).await,
        "quote" => quote::run(context, ctx, interaction).await,
        "version" => version::run(context, ctx, interaction).await,
        "ask" => ask::run(context, ctx, interaction).await,
        unknown => {
            tracing::warn!("Received unknown slash command '{}'", unknown);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!("Slash command '{}' failed: {}", interaction.data.name, e);
    }
}

/// Applies a per-user cooldown, notifying the user when throttled.
///
/// # Returns
/// - `Ok(true)` - The command may proceed
/// - `Ok(false)` - The user is on cooldown and has been sent the retry notice
async fn pass_cooldown(
    context: &BotContext,
    ctx: &Context,
    interaction: &CommandInteraction,
    command: &'static str,
    window: Duration,
) -> Result<bool, AppError> {
    let Err(remaining) = context
        .cooldowns
        .check(command, interaction.user.id, window)
        .await
    else {
        return Ok(true);
    };

    let embed = CreateEmbed::new()
        .description(format!(
            "Please try again in {:.2}s.",
            remaining.as_secs_f64()
        ))
        .colour(COOLDOWN_COLOUR);
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(false)
}
