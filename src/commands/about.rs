//! `-embed` posts the server introduction, with its rules and FAQ widgets.
//!
//! The introduction is two embeds (a banner image and the welcome text) with
//! three rows of components: quick links, the rules button plus the FAQ and
//! review links, and the FAQ select menu. The rules button and FAQ select are
//! answered ephemerally by the handlers in this module.

use serenity::all::{
    ButtonStyle, ComponentInteraction, ComponentInteractionDataKind, Context, CreateActionRow,
    CreateButton, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, EmojiId,
    Message, ReactionType,
};

use crate::commands::{BRAND_FOOTER, DARK_EMBED_COLOUR};
use crate::context::BotContext;
use crate::error::AppError;
use crate::util::{embed_footer, EMBED_GREEN};

/// Custom id of the rules button on the introduction embed.
pub const RULES_BUTTON_ID: &str = "persistent_view:rules";

/// Custom id of the FAQ select menu on the introduction embed.
pub const FAQ_SELECT_ID: &str = "faq_select";

const BANNER_IMAGE_URL: &str = "https://i.imgur.com/h7zJWq5.png";
const ORDER_CHANNEL_URL: &str =
    "https://discord.com/channels/1326998747841822740/1326998748315914247";
const TERMS_CHANNEL_URL: &str =
    "https://discord.com/channels/1326998747841822740/1326998748315914250";
const REVIEWS_CHANNEL_URL: &str =
    "https://discord.com/channels/1326998747841822740/1330226842984124597";
const WEBSITE_URL: &str = "https://luvoweb.com";

const SERVER_RULES: [(&str, &str); 10] = [
    (
        "<:dot:996804674252439733> ``RULE 1`` - Respectful Conduct:",
        "Treat others as you wish to be treated. Avoid negativity, excessive swearing, and inciting drama. Civil debates are allowed, but unnecessary conflicts are not permitted.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 2`` - No Inappropriate/NSFW Content:",
        "Keep content appropriate for all ages. Posting NSFW or explicit material may result in severe consequences.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 3`` - No Profanity:",
        "Limited swearing is allowed, but extreme slurs or discriminatory language will lead to a ban.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 4`` - No Spamming:",
        "Avoid spamming messages, large text blocks, or repeated attachments that disrupt the chat.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 5`` - No Mini-Modding:",
        "Let the staff handle moderation. Do not provide false information or intervene in moderation.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 6`` - No Begging:",
        "Do not ask for free Nitro, roles, or currencies. Such requests may lead to punishment.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 7`` - Terms of Service:",
        "Follow Discord's Terms of Service and Community Guidelines. Failure to comply may result in a ban.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 8`` - No Wasting Staff Time:",
        "Do not waste staff time with unnecessary messages or ticket requests. For complaints, contact a senior moderator.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 9`` - No Advertisement:",
        "Only advertise in designated channels. Direct message advertisements may lead to an instant ban.",
    ),
    (
        "<:dot:996804674252439733> ``RULE 10`` - Use Common Sense:",
        "Use common sense and follow the rules to maintain a respectful environment. Exploiting loopholes may result in punishment.",
    ),
];

/// Posts the server introduction embeds with their link and FAQ components.
pub async fn handle_embed(
    context: &BotContext,
    ctx: &Context,
    message: &Message,
) -> Result<(), AppError> {
    let banner = CreateEmbed::new()
        .colour(DARK_EMBED_COLOUR)
        .image(BANNER_IMAGE_URL);

    let mut welcome = CreateEmbed::new()
        .title("Welcome to LuvoWeb Freelance!")
        .colour(DARK_EMBED_COLOUR)
        .description(concat!(
            "> LuvoWeb offers top-quality services in Web Development, Discord bot development, and UI/UX design.",
            " Our custom solutions are tailored to your needs and exceed expectations.\n\n",
            "**To place an order, open a ticket in <#1326998748315914247> or view our showcase in <#1326998748718698563>.**\n\n",
            "Contact us today to discuss your project and let us elevate your business.",
        ))
        .field(
            "💎 **__LuvoWeb QuickLinks__**",
            "> [Website](https://luvoweb.com)\n> [disboard.org](https://disboard.org/server/1326998747841822740)",
            true,
        )
        .field(
            "<:settings:1351970266825097337> **__Information__**",
            "> Established in <t:1679423400:D>\n> Founder: <@273352781442842624>\n> Vote us: [disboard.org](https://disboard.org/server/1326998747841822740)",
            true,
        )
        .footer(embed_footer(BRAND_FOOTER, &context.config.icon_url));
    if !context.config.icon_url.is_empty() {
        welcome = welcome.thumbnail(context.config.icon_url.clone());
    }

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embeds(vec![banner, welcome])
                .components(about_components()),
        )
        .await?;
    Ok(())
}

/// Builds the component rows attached to the introduction embeds.
fn about_components() -> Vec<CreateActionRow> {
    let quick_links = vec![
        CreateButton::new_link(ORDER_CHANNEL_URL)
            .label("Order Now")
            .emoji('🛒'),
        CreateButton::new_link(TERMS_CHANNEL_URL).label("Terms of Service"),
        CreateButton::new_link(WEBSITE_URL).label("Website"),
    ];

    let info_row = vec![
        CreateButton::new_link(TERMS_CHANNEL_URL)
            .label("Faq")
            .emoji(ReactionType::Custom {
                animated: false,
                id: EmojiId::new(1351970266825097337),
                name: Some("settings".to_string()),
            }),
        CreateButton::new_link(REVIEWS_CHANNEL_URL)
            .label("Reviews")
            .emoji('💎'),
        CreateButton::new(RULES_BUTTON_ID)
            .label("Rules")
            .style(ButtonStyle::Secondary)
            .emoji('📕'),
    ];

    let faq_menu = CreateSelectMenu::new(
        FAQ_SELECT_ID,
        CreateSelectMenuKind::String {
            options: vec![
                CreateSelectMenuOption::new("How will I create Order from Server", "order"),
                CreateSelectMenuOption::new("How can I contact support?", "contact"),
                CreateSelectMenuOption::new("What are the available services?", "services"),
                CreateSelectMenuOption::new("What is the Refund Policy of this Server", "refund"),
            ],
        },
    )
    .placeholder("Frequently Asked Questions!")
    .min_values(1)
    .max_values(1);

    vec![
        CreateActionRow::Buttons(quick_links),
        CreateActionRow::Buttons(info_row),
        CreateActionRow::SelectMenu(faq_menu),
    ]
}

/// Replies to the rules button with the full rule list, ephemerally.
pub async fn handle_rules_button(
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let embeds = SERVER_RULES
        .iter()
        .map(|(title, description)| {
            CreateEmbed::new()
                .title(*title)
                .description(*description)
                .colour(DARK_EMBED_COLOUR)
        })
        .collect();

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embeds(embeds)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

/// Replies to a FAQ selection with the canned answer, ephemerally.
pub async fn handle_faq_select(
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind else {
        return Ok(());
    };
    let Some(choice) = values.first() else {
        return Ok(());
    };

    let (title, answer) = match choice.as_str() {
        "order" => (
            "How will I create Order from Server",
            "To place an order, please open a ticket in <#1326998748315914247>. Provide the necessary details, and our team will assist you.",
        ),
        "contact" => (
            "How can I contact support?",
            "Contact support by sending a direct message to our team or opening a support ticket in <#1326998748315914247>.",
        ),
        "services" => (
            "What are the available services?",
            "Our services include Web Development, UI/UX Design, Discord Bot Development, and more.",
        ),
        "refund" => (
            "What is the Refund Policy of this Server",
            "Payments are made in three stages: 33% upfront, 33% after progress is shown, and 34% upon completion. Refunds are not available after project completion, but free revisions are offered. If unsatisfied before completion, you may cancel for a refund on the later stages.",
        ),
        other => {
            tracing::debug!("Ignoring unknown FAQ selection '{}'", other);
            return Ok(());
        }
    };

    let embed = CreateEmbed::new()
        .title(title)
        .description(answer)
        .colour(EMBED_GREEN);
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
    Ok(())
}
