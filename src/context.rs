//! Shared bot state passed to every event handler.
//!
//! This module defines the `BotContext` struct which holds all shared resources
//! and long-lived services the bot needs while processing gateway events. The
//! context is initialized once during startup, wrapped in an `Arc`, and handed
//! to the event handler so every event sees the same instances.
//!
//! The context includes:
//! - Loaded configuration from environment variables
//! - HTTP client for external API requests
//! - Classifier client for AI message screening
//! - Cleanup service for scheduled notice deletions
//! - Cooldown tracker for rate-limited slash commands
//! - Shard manager handle for latency reporting and shutdown

use serenity::gateway::ShardManager;
use std::sync::{Arc, OnceLock};

use crate::commands::cooldown::CooldownTracker;
use crate::config::Config;
use crate::moderation::{ClassifierClient, NoticeCleanup};

/// Shared state for the bot process.
///
/// Holds every resource that outlives a single gateway event. The struct is
/// built once in `main` and shared behind an `Arc`, so all fields are either
/// cheap handles or internally synchronized:
/// - `reqwest::Client` uses an `Arc` internally
/// - `ClassifierClient` and `NoticeCleanup` are shared through `Arc`
/// - `CooldownTracker` synchronizes its map with an `RwLock`
/// - the shard manager slot is a `OnceLock` filled in before the gateway starts
pub struct BotContext {
    /// Configuration loaded from environment variables at startup.
    pub config: Config,

    /// HTTP client for external API requests.
    ///
    /// Used by the meme and quote commands. Configured with a request timeout
    /// so a stalled third-party API cannot hang an interaction forever.
    pub http_client: reqwest::Client,

    /// Client for the AI completion API used to screen messages.
    ///
    /// Shared between the moderation router and the `/ask` command.
    pub classifier: Arc<ClassifierClient>,

    /// Tracks scheduled deletions of temporary moderation notices.
    ///
    /// Shut down on process exit so pending timers are abandoned rather than
    /// left running while the gateway connection closes.
    pub cleanup: Arc<NoticeCleanup>,

    /// Per-user cooldown state for rate-limited slash commands.
    pub cooldowns: CooldownTracker,

    /// Handle to the gateway shard manager.
    ///
    /// Filled in once the serenity client has been built, before the gateway
    /// connection starts. Used by `/version` to report shard latency and by
    /// the shutdown signal handler to stop the shards.
    pub shard_manager: OnceLock<Arc<ShardManager>>,
}

impl BotContext {
    /// Creates the shared bot context from startup dependencies.
    ///
    /// Called once in `main` after configuration has been loaded and the HTTP
    /// client built. The shard manager slot starts empty and is filled in by
    /// the bot startup code.
    ///
    /// # Arguments
    /// - `config` - Configuration loaded from environment variables
    /// - `http_client` - HTTP client for external API requests
    ///
    /// # Returns
    /// - `BotContext` - Initialized context ready to be wrapped in an `Arc`
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        Self {
            config,
            classifier: Arc::new(ClassifierClient::new(http_client.clone())),
            cleanup: Arc::new(NoticeCleanup::new()),
            cooldowns: CooldownTracker::new(),
            shard_manager: OnceLock::new(),
            http_client,
        }
    }
}
