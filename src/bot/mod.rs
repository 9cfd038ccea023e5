//! Discord gateway integration.
//!
//! This module connects the bot to Discord and routes gateway events to the
//! command, ticket, and moderation layers. The event handler holds the shared
//! bot context, so every event sees the same configuration, classifier
//! client, and cleanup service.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel data
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read message text for commands and moderation
//!   (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
