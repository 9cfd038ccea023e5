/// Normalized moderation decision derived from raw classifier text.
///
/// This is the only place classifier output is interpreted. Everything past
/// the parse works with the closed set of variants, never with the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Remove the message and mute its author.
    Delete,
    /// Point the author at the ticket channel and remove the message.
    Redirect,
    /// Leave the message alone.
    Allow,
}

impl Verdict {
    /// Maps free-form classifier text to a verdict.
    ///
    /// The check is a case-sensitive containment test in fixed priority
    /// order: text containing `DELETE` wins over `REDIRECT`, and anything
    /// else maps to [`Verdict::Allow`]. The tokens are matched anywhere in
    /// the reply, so a verbose model answer that quotes a token still
    /// triggers it.
    pub fn parse(text: &str) -> Self {
        if text.contains("DELETE") {
            Verdict::Delete
        } else if text.contains("REDIRECT") {
            Verdict::Redirect
        } else {
            Verdict::Allow
        }
    }
}
