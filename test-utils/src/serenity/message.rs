//! Test factory for creating Serenity Message objects.
//!
//! This module provides factory functions for creating mock Serenity `Message`
//! structs for testing purposes. These factories create valid Message objects
//! by deserializing JSON, simulating what Discord's API would return.

use serenity::all::{Message, User};

/// Timestamp used for every factory message, `2024-03-01 10:30:00 UTC`.
///
/// Kept fixed so tests can assert on formatted timestamps without
/// recomputing them.
pub const TEST_MESSAGE_TIMESTAMP: &str = "2024-03-01T10:30:00.000000+00:00";

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a Message object by deserializing JSON with the provided values.
/// The message has no guild id, simulating a direct message. All other
/// fields are set to reasonable defaults (no attachments, no embeds, not
/// pinned, sent at [`TEST_MESSAGE_TIMESTAMP`]).
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was sent in
/// - `author` - Message author, usually from `create_test_user`
/// - `content` - Message text content
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
/// use test_utils::serenity::user::create_test_user;
///
/// let author = create_test_user(1, "alice", false);
/// let message = create_test_message(10, 20, &author, "hello");
/// assert_eq!(message.content, "hello");
/// assert!(message.guild_id.is_none());
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author: &User,
    content: &str,
) -> Message {
    message_from_json(message_id, channel_id, None, author, content)
}

/// Creates a test Serenity Message sent inside a guild.
///
/// Identical to [`create_test_message`] except that `guild_id` is set, which
/// is how the gateway delivers messages from guild channels.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was sent in
/// - `guild_id` - Guild the channel belongs to
/// - `author` - Message author, usually from `create_test_user`
/// - `content` - Message text content
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_guild_message(
    message_id: u64,
    channel_id: u64,
    guild_id: u64,
    author: &User,
    content: &str,
) -> Message {
    message_from_json(message_id, channel_id, Some(guild_id), author, content)
}

fn message_from_json(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    author: &User,
    content: &str,
) -> Message {
    let author_value =
        serde_json::to_value(author).expect("Failed to serialize test user to JSON");

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": author_value,
        "content": content,
        "timestamp": TEST_MESSAGE_TIMESTAMP,
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "application_id": null,
        "message_reference": null,
        "flags": 0,
        "referenced_message": null,
        "interaction": null,
        "thread": null,
        "components": [],
        "sticker_items": [],
        "position": null,
        "role_subscription_data": null,
        "member": null,
        "nonce": null,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
