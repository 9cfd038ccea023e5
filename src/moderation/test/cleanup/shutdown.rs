use super::*;

/// Tests abandonment of pending timers at shutdown.
///
/// Verifies that shutdown aborts outstanding deletions: the notice is never
/// removed even after its delay would have expired.
///
/// Expected: nothing pending after shutdown, no deletion ever recorded.
#[tokio::test(start_paused = true)]
async fn abandons_pending_deletions() {
    let gateway = Arc::new(FakeGateway::new());
    let cleanup = NoticeCleanup::new();

    cleanup
        .schedule(
            gateway.clone(),
            ChannelId::new(50),
            MessageId::new(60),
            Duration::from_secs(300),
        )
        .await;
    assert_eq!(cleanup.pending().await, 1);

    cleanup.shutdown().await;
    assert_eq!(cleanup.pending().await, 0);

    tokio::time::sleep(Duration::from_secs(301)).await;

    assert!(gateway.deletions().is_empty());
}

/// Tests shutdown with nothing scheduled.
///
/// Verifies that shutting down an idle cleanup set is harmless.
///
/// Expected: no panic, nothing pending.
#[tokio::test]
async fn shutdown_with_no_tasks_is_harmless() {
    let cleanup = NoticeCleanup::new();

    cleanup.shutdown().await;

    assert_eq!(cleanup.pending().await, 0);
}
