//! Per-user cooldown tracking for rate-limited commands.
//!
//! This module provides the `CooldownTracker` for enforcing per-user cooldown
//! windows on slash commands. Each (command, user) pair records the instant of
//! its last accepted use; further uses inside the window are rejected with the
//! time remaining so the caller can tell the user when to retry. State is kept
//! in memory only and resets when the process restarts.

use serenity::model::id::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

/// Tracks the last accepted use of each rate-limited command per user.
///
/// Cloning the tracker shares the underlying map, so a single instance in the
/// bot context governs every event handler. Entries are overwritten in place
/// on each accepted use; the map only ever holds one instant per
/// (command, user) pair.
#[derive(Clone)]
pub struct CooldownTracker {
    /// Last accepted use per (command, user) pair.
    entries: Arc<RwLock<HashMap<(&'static str, UserId), Instant>>>,
}

impl CooldownTracker {
    /// Creates a new tracker with no recorded uses.
    ///
    /// # Returns
    /// - `CooldownTracker` - Empty tracker ready for use
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Checks whether a user may run a command, recording the use if so.
    ///
    /// If the user has no recorded use of the command, or their last use is
    /// older than `window`, the use is accepted and recorded. Otherwise the
    /// use is rejected and the time remaining until the window reopens is
    /// returned.
    ///
    /// # Arguments
    /// - `command` - Name of the rate-limited command
    /// - `user` - User attempting to run the command
    /// - `window` - Minimum time between accepted uses
    ///
    /// # Returns
    /// - `Ok(())` - Use accepted and recorded
    /// - `Err(Duration)` - Use rejected; time remaining until the next accepted use
    pub async fn check(
        &self,
        command: &'static str,
        user: UserId,
        window: Duration,
    ) -> Result<(), Duration> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        if let Some(last_use) = entries.get(&(command, user)) {
            let elapsed = now.duration_since(*last_use);
            if elapsed < window {
                return Err(window - elapsed);
            }
        }
        entries.insert((command, user), now);
        Ok(())
    }
}

impl Default for CooldownTracker {
    fn default() -> Self {
        Self::new()
    }
}
