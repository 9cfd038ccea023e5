//! Factory functions for creating test Serenity GuildChannel objects.

use serenity::model::channel::GuildChannel;

/// Creates a test Serenity GuildChannel object.
///
/// Builds a guild channel by deserializing a JSON structure matching
/// Discord's API format. Useful for testing channel filtering logic such as
/// category lookup and ticket counting.
///
/// # Arguments
/// - `channel_id` - The Discord channel ID
/// - `guild_id` - The Discord guild ID the channel belongs to
/// - `name` - The channel name
/// - `kind` - The numeric channel type (0 = text, 4 = category)
/// - `parent_id` - Optional category channel ID this channel sits under
///
/// # Returns
/// - `GuildChannel` - A test channel object
///
/// # Panics
/// Panics if the JSON structure doesn't match Serenity's expected format
/// (which would indicate a bug in this test utility).
pub fn create_test_guild_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    parent_id: Option<u64>,
) -> GuildChannel {
    let channel_json = serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "type": kind,
        "position": 0,
        "parent_id": parent_id.map(|id| id.to_string()),
        "permission_overwrites": [],
        "nsfw": false,
        "topic": null,
        "last_message_id": null,
        "last_pin_timestamp": null,
        "bitrate": null,
        "user_limit": null,
        "rate_limit_per_user": null,
    });

    serde_json::from_value(channel_json)
        .expect("Failed to create test guild channel - invalid JSON structure")
}
