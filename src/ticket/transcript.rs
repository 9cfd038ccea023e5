//! HTML transcript rendering for closed tickets.

use chrono::DateTime;
use serenity::all::Message;

/// Renders a ticket's message history as a standalone HTML document.
///
/// Discord returns history newest first; the transcript lists messages oldest
/// first so it reads top to bottom. Each entry carries the author's name and
/// avatar and the send time as a UTC timestamp. The style sheet is embedded
/// so the document is self-contained.
pub fn render(messages: &[Message], css: &str) -> String {
    let mut entries = String::new();
    for message in messages.iter().rev() {
        let author_name = &message.author.name;
        let author_avatar = message.author.face();
        let sent_at = DateTime::from_timestamp(message.timestamp.unix_timestamp(), 0)
            .map(|utc| utc.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();

        entries.push_str(&format!(
            "<div class=\"message\"><img src=\"{}\" alt=\"{}\"/><span class=\"author\">{}</span><span class=\"timestamp\">{}</span><div class=\"content\">{}</div></div>",
            author_avatar, author_name, author_name, sent_at, message.content
        ));
    }

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>{}</style></head><body><div class=\"messages\">{}</div></body></html>",
        css, entries
    )
}
