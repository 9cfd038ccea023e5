//! Scheduled deletion of redirect notices.

use std::sync::Arc;
use std::time::Duration;

use serenity::all::{ChannelId, MessageId};
use tokio::sync::Mutex;
use tokio::task::JoinSet;

use crate::moderation::gateway::{GatewayError, ModerationGateway};

/// Deletes redirect notices once their lifetime expires.
///
/// Every scheduled deletion runs as its own task inside one JoinSet so the
/// outstanding timers can be abandoned in a single place at shutdown. There
/// is no persistence: notices still pending when the process stops simply
/// stay in their channel.
pub struct NoticeCleanup {
    tasks: Mutex<JoinSet<()>>,
}

impl NoticeCleanup {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Schedules deletion of a notice after the given delay.
    ///
    /// A notice that was already removed by hand is not an error; any other
    /// deletion failure is logged and otherwise ignored.
    pub async fn schedule(
        &self,
        gateway: Arc<dyn ModerationGateway>,
        channel: ChannelId,
        notice: MessageId,
        delay: Duration,
    ) {
        let mut tasks = self.tasks.lock().await;

        // Reap timers that already fired so the set does not grow unbounded.
        while tasks.try_join_next().is_some() {}

        tasks.spawn(async move {
            tokio::time::sleep(delay).await;

            match gateway.delete_message(channel, notice).await {
                Ok(()) => {}
                Err(GatewayError::NotFound) => {
                    tracing::debug!("Redirect notice {} was already deleted", notice)
                }
                Err(e) => tracing::warn!("Failed to delete redirect notice {}: {}", notice, e),
            }
        });
    }

    /// Number of scheduled deletions that have not been reaped yet.
    pub async fn pending(&self) -> usize {
        self.tasks.lock().await.len()
    }

    /// Abandons all outstanding scheduled deletions.
    pub async fn shutdown(&self) {
        let mut tasks = self.tasks.lock().await;
        let outstanding = tasks.len();
        tasks.shutdown().await;

        if outstanding > 0 {
            tracing::info!("Abandoned {} scheduled notice deletions", outstanding);
        }
    }
}

impl Default for NoticeCleanup {
    fn default() -> Self {
        Self::new()
    }
}
