//! `-rules` posts the community guidelines.

use serenity::all::{Context, CreateEmbed, CreateMessage, Message};
use tokio::time::sleep;

use crate::commands::{BRAND_FOOTER, DARK_EMBED_COLOUR, EMBED_SEND_DELAY};
use crate::context::BotContext;
use crate::error::AppError;
use crate::util::embed_footer;

const RULES_IMAGE_URL: &str = "https://i.imgur.com/ltnEOM1.png";

const COMMUNITY_RULES: [(&str, &str); 12] = [
    (
        "<:dot:996804674252439733> RULE 1 - Do Not Spam",
        "Avoid sending repetitive messages, excessive emojis, or flooding channels with content. This includes project requests, portfolio shares, or technical questions. Use the appropriate channels for your inquiries and limit your messages to maintain a clean, professional environment.",
    ),
    (
        "<:dot:996804674252439733> RULE 2 - No Discrimination",
        "Our agency values diversity and inclusion. Any form of racism, sexism, homophobia, or discriminatory behavior against clients, team members, or community participants will not be tolerated. Treat everyone with respect regardless of their technical experience, background, or business size.",
    ),
    (
        "<:dot:996804674252439733> RULE 3 - No Harassment or Bullying",
        "Criticism of work should be constructive and professional. Do not belittle others' technical skills, design choices, or business decisions. We foster a supportive environment for learning and collaboration, not competition or negativity.",
    ),
    (
        "<:dot:996804674252439733> RULE 4 - No NSFW Content",
        "Keep all content work-appropriate. This is a professional server for web development services. Do not share, request, or discuss explicit material, even in the context of website projects. We maintain a professional image and environment at all times.",
    ),
    (
        "<:dot:996804674252439733> RULE 5 - No Unauthorized Selling",
        "Do not offer competing services or sell products within our community. Only LuvoWeb team members may offer development services here. Clients should not be solicited by other developers in any channel or via DM. Violations will result in immediate removal.",
    ),
    (
        "<:dot:996804674252439733> RULE 6 - No Illegal Activities",
        "Do not request or offer services for illegal websites or applications (phishing, scamming, copyright infringement, etc.). All projects must comply with relevant laws and regulations. We will not participate in or facilitate illegal activities, including software piracy or unauthorized access systems.",
    ),
    (
        "<:dot:996804674252439733> RULE 7 - No DM Advertising",
        "Do not send unsolicited messages to members offering services, requesting work, or promoting external businesses. All inquiries must go through proper channels. Respect others' privacy and our professional environment. Direct message advertising will result in immediate action.",
    ),
    (
        "<:dot:996804674252439733> RULE 8 - Respect Staff Authority",
        "Our staff makes final decisions regarding projects, timelines, and pricing. Do not argue with staff about estimates, deadlines, or technical approaches in public channels. If you have concerns, address them privately through appropriate support channels or with senior management.",
    ),
    (
        "<:dot:996804674252439733> RULE 9 - Follow Discord TOS & Industry Ethics",
        "Adhere to both Discord's Terms of Service and web development industry ethical standards. This includes respecting intellectual property, maintaining client confidentiality, and following accessibility guidelines where applicable. [Discord Terms of Service](https://discord.com/terms)",
    ),
    (
        "<:dot:996804674252439733> RULE 10 - No Public Advertising",
        "Do not advertise external services, agencies, freelancers, or competing products in any public channel. This includes subtle references, portfolio links (unless requested by staff), or mentions of other development teams. Use designated channels for sharing resources when appropriate.",
    ),
    (
        "<:dot:996804674252439733> RULE 11 - No Unsolicited Project Requests",
        "All project inquiries must be made through the proper ticket system, not in public channels. Do not interrupt ongoing discussions with your project needs or repeatedly ask for quotes in community spaces. Respect our workflow and process for handling client requests.",
    ),
    (
        "<:dot:996804674252439733> RULE 12 - Professional Conduct",
        "Maintain professional communication at all times. Use appropriate technical terminology, provide clear requirements when requesting services, and respect confidentiality agreements. Remember that this server represents a professional web development agency, not a casual community.",
    ),
];

/// Posts the rules intro followed by each guideline embed.
pub async fn handle_rules(
    context: &BotContext,
    ctx: &Context,
    message: &Message,
) -> Result<(), AppError> {
    let intro = CreateEmbed::new()
        .title("LuvoWeb Community Guidelines")
        .description("Please follow these rules to maintain a professional environment for our web development community.")
        .colour(DARK_EMBED_COLOUR)
        .image(RULES_IMAGE_URL);
    message
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(intro))
        .await?;

    for (title, description) in COMMUNITY_RULES {
        let embed = CreateEmbed::new()
            .title(title)
            .description(description)
            .colour(DARK_EMBED_COLOUR)
            .footer(embed_footer(BRAND_FOOTER, &context.config.icon_url));
        message
            .channel_id
            .send_message(&ctx.http, CreateMessage::new().embed(embed))
            .await?;
        sleep(EMBED_SEND_DELAY).await;
    }
    Ok(())
}
