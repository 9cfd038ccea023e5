//! `-terms` posts the Terms of Service.

use serenity::all::{Context, CreateEmbed, CreateMessage, Message};
use tokio::time::sleep;

use crate::commands::{BRAND_FOOTER, DARK_EMBED_COLOUR, EMBED_SEND_DELAY};
use crate::context::BotContext;
use crate::error::AppError;
use crate::util::embed_footer;

const TERMS_IMAGE_URL: &str = "https://i.imgur.com/22VpVZg.jpeg";

const TERMS_SECTIONS: [(&str, &str); 12] = [
    (
        "<:dot:996804674252439733> Services Overview",
        "LuvoWeb provides web development, UI/UX design, and Discord bot development services. All services are provided on an as-is basis with no guarantees except as expressly provided in these terms. We reserve the right to refuse service to anyone for any reason at any time.",
    ),
    (
        "<:dot:996804674252439733> Project Process",
        "All projects begin with requirement gathering through our ticket system. Once requirements are confirmed, we provide a timeline and pricing quote. Work begins after initial payment is received. Regular updates will be provided throughout the development process.",
    ),
    (
        "<:dot:996804674252439733> Payment Terms",
        "Payment is structured in three phases: 33% upfront, 33% after demonstrable progress, and 34% upon project completion. Prices are quoted in USD. We accept payment via PayPal, bank transfer, crypto, or other methods as specified in your contract. Invoices must be paid within 7 days of issuance.",
    ),
    (
        "<:dot:996804674252439733> Intellectual Property Rights",
        "Upon final payment, clients receive full ownership rights to the final deliverables created specifically for them. LuvoWeb retains rights to any pre-existing code, frameworks, or tools used in development. We reserve the right to display work in our portfolio unless specifically agreed otherwise.",
    ),
    (
        "<:dot:996804674252439733> Revisions and Modifications",
        "Each project includes a predefined number of revision cycles as specified in your contract. Additional revisions beyond this limit will incur extra charges. Major changes to project scope may require renegotiation of timeline and costs. Minor adjustments after project completion are offered for 30 days at no additional cost.",
    ),
    (
        "<:dot:996804674252439733> Client Responsibilities",
        "Clients are responsible for providing timely feedback, necessary content, and access to accounts required for project completion. Delayed responses from clients may result in project timeline extensions. Clients must ensure they have proper rights to all content provided for use in the project.",
    ),
    (
        "<:dot:996804674252439733> Confidentiality",
        "We treat all client information as confidential and will not share sensitive details with third parties without permission. Clients agree not to disclose proprietary information about our development processes. NDAs are available upon request for projects requiring additional confidentiality.",
    ),
    (
        "<:dot:996804674252439733> Cancellation Policy",
        "Project cancellation by the client after work has begun will result in payment for all work completed up to that point. The initial deposit is non-refundable. LuvoWeb reserves the right to terminate projects due to client inactivity (no response for 21+ days) or violation of these terms.",
    ),
    (
        "<:dot:996804674252439733> Refund Policy",
        "No refunds are provided after project completion and delivery. For cancellations prior to completion, refunds are limited to payments for work not yet performed, minus the non-refundable deposit. Dispute resolution will be attempted before any refund is processed.",
    ),
    (
        "<:dot:996804674252439733> Limitation of Liability",
        "LuvoWeb is not liable for any damages arising from the use of our services beyond the amount paid for the project. We do not guarantee specific business outcomes, traffic increases, or revenue generation. We are not responsible for third-party services integrated into client projects.",
    ),
    (
        "<:dot:996804674252439733> Hosting and Maintenance",
        "Unless specifically included in your contract, hosting, domain registration, and ongoing maintenance are not included in project fees. We offer separate maintenance packages that can be purchased after project completion. Clients are responsible for their hosting environment unless otherwise specified.",
    ),
    (
        "<:dot:996804674252439733> Dispute Resolution",
        "Any disputes will be addressed through good-faith negotiation before other actions are taken. If negotiation fails, disputes will be resolved according to the laws of our registered jurisdiction. By using our services, you agree to these terms in their entirety.",
    ),
];

/// Posts the Terms of Service intro followed by each section embed.
pub async fn handle_terms(
    context: &BotContext,
    ctx: &Context,
    message: &Message,
) -> Result<(), AppError> {
    let intro = CreateEmbed::new()
        .title("LuvoWeb Terms of Service")
        .description("Please review our Terms of Service carefully before engaging our services.")
        .colour(DARK_EMBED_COLOUR)
        .image(TERMS_IMAGE_URL);
    message
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(intro))
        .await?;

    for (title, description) in TERMS_SECTIONS {
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
