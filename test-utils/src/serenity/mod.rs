//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Message, etc.) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Overview
//!
//! When testing code that inspects Discord messages via Serenity, you often
//! need to create mock Serenity structs. These factories provide a consistent
//! way to create these objects with sensible defaults while allowing
//! customization of key fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_message, create_test_user};
//!
//! #[test]
//! fn test_message_screening() {
//!     // Create a test author
//!     let author = create_test_user(123456789, "alice", false);
//!
//!     // Create a message sent in a guild channel
//!     let message = create_test_guild_message(1, 100, 200, &author, "hello");
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects
//! - `message::create_test_guild_message` - Create Message objects with a guild id
//! - `channel::create_test_guild_channel` - Create Serenity GuildChannel objects

pub mod channel;
pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use channel::create_test_guild_channel;
pub use message::{create_test_guild_message, create_test_message};
pub use user::create_test_user;
