use std::sync::Arc;
use std::time::Duration;

use serenity::all::UserId;

use crate::moderation::action::ModerationActionService;
use crate::moderation::classifier::ClassifierClient;
use crate::moderation::cleanup::NoticeCleanup;
use crate::moderation::router::ModerationRouter;
use crate::moderation::test::fakes::{sample_request, FakeBackend, FakeGateway};

mod process;

/// Router wired to the given fakes, with an empty guild role list.
fn router_over(backend: Arc<FakeBackend>, gateway: Arc<FakeGateway>) -> ModerationRouter {
    let classifier = Arc::new(ClassifierClient::with_backend(backend));
    let cleanup = Arc::new(NoticeCleanup::new());
    let actions = ModerationActionService::new(gateway, cleanup, String::new());
    ModerationRouter::new(classifier, actions)
}
