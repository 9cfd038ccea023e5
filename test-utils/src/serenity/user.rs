//! Test factory for creating Serenity User objects.
//!
//! This module provides factory functions for creating mock Serenity `User`
//! structs for testing purposes. These factories create valid User objects by
//! deserializing JSON, simulating what Discord's API would return.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values.
/// The user carries the legacy `0001` discriminator so tag formatting is
/// exercised the same way it is for real accounts.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Account username
/// - `bot` - Whether the account is a bot user
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(123456789, "alice", false);
/// assert_eq!(user.name, "alice");
/// assert!(!user.bot);
///
/// let bot = create_test_user(987654321, "helper-bot", true);
/// assert!(bot.bot);
/// ```
pub fn create_test_user(user_id: u64, name: &str, bot: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0001",
        "global_name": null,
        "avatar": null,
        "banner": null,
        "accent_color": null,
        "bot": bot,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
