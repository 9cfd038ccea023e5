//! `/ask` forwards a question to the AI completion API.

use serenity::all::{
    Colour, CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Timestamp,
};
use tokio::time::Duration;

use crate::commands::BRAND_FOOTER;
use crate::context::BotContext;
use crate::error::AppError;
use crate::util::{embed_footer, truncate_with_ellipsis};

const COOLDOWN: Duration = Duration::from_secs(10);
const QUESTION_PREVIEW_LIMIT: usize = 1000;
const RESPONSE_LIMIT: usize = 4000;
const ASK_COLOUR: Colour = Colour::from_rgb(66, 95, 71);

/// Runs the `/ask` command.
///
/// The response is deferred while the question runs through the same provider
/// failover as moderation prompts; a total outage surfaces as the fallback
/// reply rather than an error.
pub async fn run(
    context: &BotContext,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    if !super::pass_cooldown(context, ctx, interaction, "ask", COOLDOWN).await? {
        return Ok(());
    }

    let question = interaction
        .data
        .options
        .iter()
        .find(|option| option.name == "question")
        .and_then(|option| option.value.as_str())
        .unwrap_or("")
        .to_string();

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new()),
        )
        .await?;

    let reply = context.classifier.classify(&question).await;
    let answer: String = reply.chars().take(RESPONSE_LIMIT).collect();

    let embed = CreateEmbed::new()
        .colour(ASK_COLOUR)
        .timestamp(Timestamp::now())
        .description(format!(
            "**Question:**\n```{}```",
            truncate_with_ellipsis(&question, QUESTION_PREVIEW_LIMIT)
        ))
        .field("AI Response", answer, false)
        .thumbnail(interaction.user.face())
        .footer(embed_footer(
            format!("Requested by {} • LuvoWeb", interaction.user.name),
            &context.config.icon_url,
        ));

    if let Err(e) = interaction
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new().embed(embed),
        )
        .await
    {
        let detail: String = e.to_string().chars().take(1000).collect();
        let notice = CreateEmbed::new()
            .title("<a:alert:1351969965233934466> Error")
            .description(format!(
                "I couldn't process your request properly. Please try again later.\n\n```{}```",
                detail
            ))
            .colour(Colour::RED)
            .footer(embed_footer(BRAND_FOOTER, &context.config.icon_url));
        interaction
            .create_followup(
                &ctx.http,
                CreateInteractionResponseFollowup::new()
                    .embed(notice)
                    .ephemeral(true),
            )
            .await?;
    }
    Ok(())
}
