use super::*;

/// Tests a single healthy provider.
///
/// Verifies that a reply from one provider is returned as-is while the
/// unscripted providers fail without affecting the result.
///
/// Expected: the scripted reply.
#[tokio::test]
async fn returns_reply_from_healthy_provider() {
    let backend = Arc::new(FakeBackend::new().script(
        "Blackbox",
        Duration::ZERO,
        vec![Ok("GOOD")],
    ));
    let client = ClassifierClient::with_backend(backend.clone());

    let reply = client.classify("is this fine?").await;

    assert_eq!(reply, "GOOD");
    assert_eq!(backend.attempts_for("Blackbox"), 1);
}

/// Tests that the first successful reply wins the race.
///
/// Verifies that a fast provider beats a slow one regardless of submission
/// order: the slow provider is listed first but the fast reply is returned.
///
/// Expected: the fast provider's reply.
#[tokio::test(start_paused = true)]
async fn first_success_wins() {
    let backend = Arc::new(
        FakeBackend::new()
            .script("Blackbox", Duration::from_secs(3), vec![Ok("SLOW")])
            .script("DarkAI", Duration::from_secs(1), vec![Ok("FAST")]),
    );
    let client = ClassifierClient::with_backend(backend);

    let reply = client.classify("race").await;

    assert_eq!(reply, "FAST");
}

/// Tests that failures are skipped while waiting for a success.
///
/// Verifies that an early failure result does not win the race: the only
/// successful provider is slower than the failing ones but its reply is
/// still returned.
///
/// Expected: the slow success, not the fallback.
#[tokio::test(start_paused = true)]
async fn failure_does_not_win_race() {
    let backend = Arc::new(FakeBackend::new().script(
        "PollinationsAI",
        Duration::from_secs(2),
        vec![Ok("EVENTUAL")],
    ));
    let client = ClassifierClient::with_backend(backend.clone());

    let reply = client.classify("patience").await;

    assert_eq!(reply, "EVENTUAL");
    // The unscripted providers burned their full attempt budget first.
    assert_eq!(backend.attempts_for("Blackbox"), 3);
    assert_eq!(backend.attempts_for("DarkAI"), 3);
}

/// Tests the per-provider retry budget.
///
/// Verifies that a provider failing twice still wins with its third attempt
/// and that no provider is tried more than three times.
///
/// Expected: the third-attempt reply after exactly three attempts.
#[tokio::test]
async fn retries_within_attempt_budget() {
    let backend = Arc::new(FakeBackend::new().script(
        "DarkAI",
        Duration::ZERO,
        vec![Err(500), Err(502), Ok("THIRD TIME")],
    ));
    let client = ClassifierClient::with_backend(backend.clone());

    let reply = client.classify("retry").await;

    assert_eq!(reply, "THIRD TIME");
    assert_eq!(backend.attempts_for("DarkAI"), 3);
}

/// Tests the fallback reply.
///
/// Verifies that when every provider fails every attempt, the fixed
/// fallback text is returned and each provider was tried exactly three
/// times.
///
/// Expected: the fallback reply after nine total attempts.
#[tokio::test]
async fn all_providers_failing_yields_fallback() {
    let backend = Arc::new(FakeBackend::new());
    let client = ClassifierClient::with_backend(backend.clone());

    let reply = client.classify("nobody home").await;

    assert_eq!(reply, FALLBACK_REPLY);
    assert_eq!(backend.total_calls(), 9);
    assert_eq!(backend.attempts_for("Blackbox"), 3);
    assert_eq!(backend.attempts_for("DarkAI"), 3);
    assert_eq!(backend.attempts_for("PollinationsAI"), 3);
}

/// Tests that providers are queried concurrently.
///
/// Verifies that three providers each taking ten seconds produce a reply
/// after roughly ten seconds of (virtual) time, not thirty.
///
/// Expected: elapsed time close to one provider's delay.
#[tokio::test(start_paused = true)]
async fn providers_race_concurrently() {
    let backend = Arc::new(
        FakeBackend::new()
            .script("Blackbox", Duration::from_secs(10), vec![Ok("A")])
            .script("DarkAI", Duration::from_secs(10), vec![Ok("B")])
            .script("PollinationsAI", Duration::from_secs(10), vec![Ok("C")]),
    );
    let client = ClassifierClient::with_backend(backend);

    let started = tokio::time::Instant::now();
    client.classify("parallel").await;

    assert!(started.elapsed() < Duration::from_secs(11));
}

/// Tests that the prompt reaches the backend unchanged.
///
/// Verifies that every provider receives the exact prompt text.
///
/// Expected: all recorded prompts equal the input.
#[tokio::test]
async fn prompt_passed_through_unchanged() {
    let backend = Arc::new(FakeBackend::new().script(
        "Blackbox",
        Duration::ZERO,
        vec![Ok("GOOD")],
    ));
    let client = ClassifierClient::with_backend(backend.clone());

    client.classify("the exact prompt").await;

    let prompts = backend.prompts();
    assert!(!prompts.is_empty());
    assert!(prompts.iter().all(|prompt| prompt == "the exact prompt"));
}
