use super::*;

/// Tests the full delete flow.
///
/// Verifies that a delete verdict posts the audit embed, deletes the
/// offending message, assigns the Muted role, and DMs the author, in that
/// order of concerns.
///
/// Expected: all four side effects recorded.
#[tokio::test]
async fn runs_all_delete_steps() {
    let mut gateway = FakeGateway::new();
    gateway.roles.insert("Muted".to_string(), RoleId::new(40));
    let gateway = Arc::new(gateway);
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup, String::new());

    let request = sample_request("buy my website templates");
    service.apply(Verdict::Delete, &request).await;

    assert_eq!(gateway.posts_in(DELETION_LOG).len(), 1);
    assert!(gateway.deletions().contains(&(request.channel_id, request.message_id)));
    assert_eq!(
        gateway.role_assignments.lock().unwrap().as_slice(),
        &[(request.guild_id, request.author_id, RoleId::new(40))]
    );
    assert_eq!(
        gateway.direct_messages.lock().unwrap().as_slice(),
        &[request.author_id]
    );
}

/// Tests the delete flow without a Muted role.
///
/// Verifies that a guild missing the Muted role skips the mute but still
/// deletes the message and notifies the author.
///
/// Expected: audit, deletion, and DM recorded; no role assignment.
#[tokio::test]
async fn missing_muted_role_skips_mute_only() {
    let gateway = Arc::new(FakeGateway::new());
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup, String::new());

    let request = sample_request("spam");
    service.apply(Verdict::Delete, &request).await;

    assert_eq!(gateway.posts_in(DELETION_LOG).len(), 1);
    assert!(gateway.deletions().contains(&(request.channel_id, request.message_id)));
    assert!(gateway.role_assignments.lock().unwrap().is_empty());
    assert_eq!(
        gateway.direct_messages.lock().unwrap().as_slice(),
        &[request.author_id]
    );
}

/// Tests the delete flow with an unavailable audit channel.
///
/// Verifies that a failing audit post does not stop the message deletion or
/// the mute.
///
/// Expected: deletion, role assignment, and DM still recorded.
#[tokio::test]
async fn audit_failure_does_not_block_later_steps() {
    let mut gateway = FakeGateway::new();
    gateway.roles.insert("Muted".to_string(), RoleId::new(40));
    gateway.unavailable_channels.push(DELETION_LOG);
    let gateway = Arc::new(gateway);
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup, String::new());

    let request = sample_request("spam");
    service.apply(Verdict::Delete, &request).await;

    assert!(gateway.posts_in(DELETION_LOG).is_empty());
    assert!(gateway.deletions().contains(&(request.channel_id, request.message_id)));
    assert_eq!(gateway.role_assignments.lock().unwrap().len(), 1);
    assert_eq!(gateway.direct_messages.lock().unwrap().len(), 1);
}

/// Tests the delete flow when muting is denied.
///
/// Verifies that a permission failure on the role assignment still leaves
/// the author with their DM notice.
///
/// Expected: no role assignment, DM recorded.
#[tokio::test]
async fn denied_mute_still_notifies_author() {
    let mut gateway = FakeGateway::new();
    gateway.roles.insert("Muted".to_string(), RoleId::new(40));
    gateway.deny_role_assignment = true;
    let gateway = Arc::new(gateway);
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup, String::new());

    let request = sample_request("spam");
    service.apply(Verdict::Delete, &request).await;

    assert!(gateway.role_assignments.lock().unwrap().is_empty());
    assert_eq!(
        gateway.direct_messages.lock().unwrap().as_slice(),
        &[request.author_id]
    );
}

/// Tests the delete flow when the author's DMs are closed.
///
/// Verifies that the undeliverable notice is swallowed without affecting
/// the earlier steps.
///
/// Expected: audit, deletion, and mute recorded; no DM.
#[tokio::test]
async fn closed_dms_do_not_fail_the_flow() {
    let mut gateway = FakeGateway::new();
    gateway.roles.insert("Muted".to_string(), RoleId::new(40));
    gateway.dms_closed = true;
    let gateway = Arc::new(gateway);
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup, String::new());

    let request = sample_request("spam");
    service.apply(Verdict::Delete, &request).await;

    assert_eq!(gateway.posts_in(DELETION_LOG).len(), 1);
    assert!(gateway.deletions().contains(&(request.channel_id, request.message_id)));
    assert_eq!(gateway.role_assignments.lock().unwrap().len(), 1);
    assert!(gateway.direct_messages.lock().unwrap().is_empty());
}
