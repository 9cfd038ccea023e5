use super::*;

/// Tests the allow verdict.
///
/// Verifies that an allowed message triggers no Discord side effects at
/// all: nothing posted, nothing deleted, nobody muted or messaged.
///
/// Expected: every gateway record empty, nothing scheduled.
#[tokio::test]
async fn allow_is_a_no_op() {
    let mut gateway = FakeGateway::new();
    gateway.roles.insert("Muted".to_string(), RoleId::new(40));
    let gateway = Arc::new(gateway);
    let cleanup = Arc::new(NoticeCleanup::new());
    let service = ModerationActionService::new(gateway.clone(), cleanup.clone(), String::new());

    let request = sample_request("what do you all think of this CSS trick?");
    service.apply(Verdict::Allow, &request).await;

    assert!(gateway.posts.lock().unwrap().is_empty());
    assert!(gateway.deletions().is_empty());
    assert!(gateway.role_assignments.lock().unwrap().is_empty());
    assert!(gateway.direct_messages.lock().unwrap().is_empty());
    assert_eq!(cleanup.pending().await, 0);
}
