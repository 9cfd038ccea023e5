use super::*;

/// Tests the exempt author filter.
///
/// Verifies that messages from the exempt staff account are never sent to
/// the classifier, even inside the moderated category.
///
/// Expected: zero classifier calls, zero side effects.
#[tokio::test]
async fn exempt_author_is_not_screened() {
    let backend = Arc::new(FakeBackend::new().script("Blackbox", Duration::ZERO, vec![Ok("DELETE")]));
    let gateway = Arc::new(FakeGateway::new());
    let router = router_over(backend.clone(), gateway.clone());

    let mut request = sample_request("selling websites");
    request.author_id = UserId::new(273352781442842624);

    router.process(request, Some("Community")).await;

    assert_eq!(backend.total_calls(), 0);
    assert!(gateway.deletions().is_empty());
}

/// Tests the category filter.
///
/// Verifies that messages outside the Community category, including
/// channels without any category, are never classified.
///
/// Expected: zero classifier calls.
#[tokio::test]
async fn non_community_channels_are_not_screened() {
    let backend = Arc::new(FakeBackend::new().script("Blackbox", Duration::ZERO, vec![Ok("DELETE")]));
    let gateway = Arc::new(FakeGateway::new());
    let router = router_over(backend.clone(), gateway.clone());

    router.process(sample_request("spam"), Some("General")).await;
    router.process(sample_request("spam"), None).await;

    assert_eq!(backend.total_calls(), 0);
    assert!(gateway.deletions().is_empty());
}

/// Tests category name matching.
///
/// Verifies that the category comparison is exact, so a category merely
/// containing the word Community does not match.
///
/// Expected: zero classifier calls.
#[tokio::test]
async fn category_match_is_exact() {
    let backend = Arc::new(FakeBackend::new().script("Blackbox", Duration::ZERO, vec![Ok("DELETE")]));
    let gateway = Arc::new(FakeGateway::new());
    let router = router_over(backend.clone(), gateway.clone());

    router
        .process(sample_request("spam"), Some("Community Projects"))
        .await;

    assert_eq!(backend.total_calls(), 0);
}

/// Tests dispatch of a delete verdict.
///
/// Verifies that a DELETE reply from the classifier removes the offending
/// message.
///
/// Expected: the message deletion recorded.
#[tokio::test]
async fn delete_reply_removes_message() {
    let backend = Arc::new(FakeBackend::new().script("Blackbox", Duration::ZERO, vec![Ok("DELETE")]));
    let gateway = Arc::new(FakeGateway::new());
    let router = router_over(backend, gateway.clone());

    let request = sample_request("buy my templates");
    let (channel_id, message_id) = (request.channel_id, request.message_id);

    router.process(request, Some("Community")).await;

    assert!(gateway.deletions().contains(&(channel_id, message_id)));
}

/// Tests dispatch of a redirect verdict.
///
/// Verifies that a REDIRECT reply posts the public notice and removes the
/// original message.
///
/// Expected: one notice in the source channel, the original deleted.
#[tokio::test]
async fn redirect_reply_posts_notice() {
    let backend =
        Arc::new(FakeBackend::new().script("Blackbox", Duration::ZERO, vec![Ok("REDIRECT")]));
    let gateway = Arc::new(FakeGateway::new());
    let router = router_over(backend, gateway.clone());

    let request = sample_request("I need someone to build a shop");
    let (channel_id, message_id) = (request.channel_id, request.message_id);

    router.process(request, Some("Community")).await;

    assert_eq!(gateway.posts_in(channel_id).len(), 1);
    assert!(gateway.deletions().contains(&(channel_id, message_id)));
}

/// Tests dispatch of an allow verdict.
///
/// Verifies that a GOOD reply leaves the message untouched.
///
/// Expected: classifier called, zero side effects.
#[tokio::test]
async fn good_reply_leaves_message_alone() {
    let backend = Arc::new(FakeBackend::new().script("Blackbox", Duration::ZERO, vec![Ok("GOOD")]));
    let gateway = Arc::new(FakeGateway::new());
    let router = router_over(backend.clone(), gateway.clone());

    router
        .process(sample_request("how do I center a div?"), Some("Community"))
        .await;

    assert!(backend.total_calls() > 0);
    assert!(gateway.posts.lock().unwrap().is_empty());
    assert!(gateway.deletions().is_empty());
}

/// Tests handling of total classifier failure.
///
/// Verifies that when every provider fails and the fallback reply comes
/// back, the message is left alone instead of being treated as allowed by
/// a real verdict, and nothing is enforced.
///
/// Expected: nine classifier attempts, zero side effects.
#[tokio::test]
async fn classifier_outage_skips_enforcement() {
    let backend = Arc::new(FakeBackend::new());
    let gateway = Arc::new(FakeGateway::new());
    let router = router_over(backend.clone(), gateway.clone());

    router.process(sample_request("spam"), Some("Community")).await;

    assert_eq!(backend.total_calls(), 9);
    assert!(gateway.posts.lock().unwrap().is_empty());
    assert!(gateway.deletions().is_empty());
}

/// Tests the prompt handed to the classifier.
///
/// Verifies that the classifier receives the guideline prompt with the
/// message content embedded, not the bare message.
///
/// Expected: prompt contains both instruction text and the content.
#[tokio::test]
async fn prompt_wraps_message_content() {
    let backend = Arc::new(FakeBackend::new().script("Blackbox", Duration::ZERO, vec![Ok("GOOD")]));
    let gateway = Arc::new(FakeGateway::new());
    let router = router_over(backend.clone(), gateway);

    router
        .process(sample_request("check out my portfolio"), Some("Community"))
        .await;

    let prompts = backend.prompts();
    assert!(!prompts.is_empty());
    assert!(prompts[0].contains("web development agency"));
    assert!(prompts[0].contains("\"\"\"check out my portfolio\"\"\""));
}
