use super::*;

/// Tests the full redirect flow.
///
/// Verifies that a redirect verdict posts the public notice in the source
/// channel, alerts the lead channel, deletes the original message, and
/// schedules the notice for deletion once its lifetime expires.
///
/// Expected: notice and alert posted, original deleted, then the notice
/// deleted after the lifetime passes.
#[tokio::test(start_paused = true)]
async fn runs_all_redirect_steps() {
    let gateway = Arc::new(FakeGateway::new());
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup.clone(), String::new());

    let request = sample_request("anyone here I can hire?");
    service.apply(Verdict::Redirect, &request).await;

    let notices = gateway.posts_in(request.channel_id);
    assert_eq!(notices.len(), 1);
    assert_eq!(gateway.posts_in(LEAD_CHANNEL).len(), 1);
    assert!(gateway.deletions().contains(&(request.channel_id, request.message_id)));
    assert_eq!(cleanup.pending().await, 1);

    tokio::time::sleep(NOTICE_LIFETIME + std::time::Duration::from_secs(1)).await;

    assert!(gateway.deletions().contains(&(request.channel_id, notices[0])));
}

/// Tests notice cleanup when the notice was removed by hand.
///
/// Verifies that the scheduled deletion tolerates a notice that no longer
/// exists when its timer fires.
///
/// Expected: no deletion recorded for the notice, no panic.
#[tokio::test(start_paused = true)]
async fn tolerates_manually_deleted_notice() {
    let mut gateway = FakeGateway::new();
    // The first message the fake hands out gets id 1000, which will be the
    // redirect notice.
    gateway
        .missing_messages
        .push((ChannelId::new(901), MessageId::new(1000)));
    let gateway = Arc::new(gateway);
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup, String::new());

    let request = sample_request("looking for a dev");
    service.apply(Verdict::Redirect, &request).await;

    tokio::time::sleep(NOTICE_LIFETIME + std::time::Duration::from_secs(1)).await;

    let deletions = gateway.deletions();
    assert!(deletions.contains(&(request.channel_id, request.message_id)));
    assert!(!deletions.contains(&(ChannelId::new(901), MessageId::new(1000))));
}

/// Tests the redirect flow when the notice cannot be posted.
///
/// Verifies that a failing notice post skips the cleanup timer but still
/// alerts the lead channel and deletes the original message.
///
/// Expected: alert and deletion recorded, nothing scheduled.
#[tokio::test]
async fn failed_notice_skips_cleanup() {
    let mut gateway = FakeGateway::new();
    gateway.unavailable_channels.push(ChannelId::new(901));
    let gateway = Arc::new(gateway);
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup.clone(), String::new());

    let request = sample_request("need a website built");
    service.apply(Verdict::Redirect, &request).await;

    assert!(gateway.posts_in(request.channel_id).is_empty());
    assert_eq!(gateway.posts_in(LEAD_CHANNEL).len(), 1);
    assert!(gateway.deletions().contains(&(request.channel_id, request.message_id)));
    assert_eq!(cleanup.pending().await, 0);
}

/// Tests that redirect never touches mute machinery.
///
/// Verifies that a redirect assigns no roles and sends no DMs.
///
/// Expected: no role assignments, no direct messages.
#[tokio::test]
async fn redirect_does_not_mute_or_dm() {
    let mut gateway = FakeGateway::new();
    gateway.roles.insert("Muted".to_string(), RoleId::new(40));
    let gateway = Arc::new(gateway);
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup, String::new());

    let request = sample_request("can someone build me a shop?");
    service.apply(Verdict::Redirect, &request).await;

    assert!(gateway.role_assignments.lock().unwrap().is_empty());
    assert!(gateway.direct_messages.lock().unwrap().is_empty());
}
