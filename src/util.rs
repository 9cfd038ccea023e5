//! Small helpers shared across command and moderation embeds.

use serenity::all::{Colour, CreateEmbedFooter};

/// Green used across confirmation and informational embeds.
pub const EMBED_GREEN: Colour = Colour::from_rgb(46, 204, 113);

/// Truncates text to at most `limit` characters, appending `...` when cut.
///
/// Counts characters rather than bytes so multi-byte content cannot be split
/// mid code point.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("...");
    truncated
}

/// Builds an embed footer with the configured icon, omitting the icon when
/// no ICON_URL is set.
pub fn embed_footer(text: impl Into<String>, icon_url: &str) -> CreateEmbedFooter {
    let footer = CreateEmbedFooter::new(text);
    if icon_url.is_empty() {
        footer
    } else {
        footer.icon_url(icon_url)
    }
}
