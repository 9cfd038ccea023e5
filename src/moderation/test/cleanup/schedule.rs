use super::*;

/// Tests deletion after the scheduled delay.
///
/// Verifies that a scheduled notice is deleted once its delay has passed.
///
/// Expected: the deletion recorded after the delay.
#[tokio::test(start_paused = true)]
async fn deletes_notice_after_delay() {
    let gateway = Arc::new(FakeGateway::new());
    let cleanup = NoticeCleanup::new();

    cleanup
        .schedule(
            gateway.clone(),
            ChannelId::new(50),
            MessageId::new(60),
            Duration::from_secs(5),
        )
        .await;

    tokio::time::sleep(Duration::from_secs(6)).await;

    assert!(gateway
        .deletions()
        .contains(&(ChannelId::new(50), MessageId::new(60))));
}

/// Tests that deletion does not run early.
///
/// Verifies that the notice is still untouched just before its delay
/// expires.
///
/// Expected: no deletion recorded yet.
#[tokio::test(start_paused = true)]
async fn does_not_delete_before_delay() {
    let gateway = Arc::new(FakeGateway::new());
    let cleanup = NoticeCleanup::new();

    cleanup
        .schedule(
            gateway.clone(),
            ChannelId::new(50),
            MessageId::new(60),
            Duration::from_secs(5),
        )
        .await;

    tokio::time::sleep(Duration::from_secs(4)).await;

    assert!(gateway.deletions().is_empty());
}

/// Tests tolerance of a notice deleted by hand.
///
/// Verifies that a timer firing for a message that no longer exists is
/// swallowed quietly.
///
/// Expected: no deletion recorded, no panic.
#[tokio::test(start_paused = true)]
async fn tolerates_already_deleted_notice() {
    let mut gateway = FakeGateway::new();
    gateway
        .missing_messages
        .push((ChannelId::new(50), MessageId::new(60)));
    let gateway = Arc::new(gateway);
    let cleanup = NoticeCleanup::new();

    cleanup
        .schedule(
            gateway.clone(),
            ChannelId::new(50),
            MessageId::new(60),
            Duration::from_secs(5),
        )
        .await;

    tokio::time::sleep(Duration::from_secs(6)).await;

    assert!(gateway.deletions().is_empty());
}

/// Tests reaping of finished timers.
///
/// Verifies that scheduling a new deletion removes timers that have already
/// fired from the set.
///
/// Expected: only the fresh timer pending.
#[tokio::test(start_paused = true)]
async fn reaps_finished_timers_on_schedule() {
    let gateway = Arc::new(FakeGateway::new());
    let cleanup = NoticeCleanup::new();

    cleanup
        .schedule(
            gateway.clone(),
            ChannelId::new(50),
            MessageId::new(60),
            Duration::from_secs(1),
        )
        .await;

    tokio::time::sleep(Duration::from_secs(2)).await;

    cleanup
        .schedule(
            gateway.clone(),
            ChannelId::new(50),
            MessageId::new(61),
            Duration::from_secs(100),
        )
        .await;

    assert_eq!(cleanup.pending().await, 1);
}
