//! Entry point of the moderation pipeline.
//!
//! Decides whether a message is screened at all, runs the classifier, and
//! hands the parsed verdict to the action service. Channel category
//! resolution happens in the event handler so this module stays free of
//! gateway state and can be exercised with fakes.

use std::sync::Arc;

use serenity::all::UserId;

use crate::moderation::action::ModerationActionService;
use crate::moderation::classifier::{ClassifierClient, FALLBACK_REPLY};
use crate::moderation::request::ModerationRequest;
use crate::moderation::verdict::Verdict;

/// Authors whose messages are never screened.
const EXEMPT_AUTHORS: [UserId; 1] = [UserId::new(273352781442842624)];

/// Only channels under this category are screened.
const MODERATED_CATEGORY: &str = "Community";

/// Screens messages from moderated channels and applies the verdict.
pub struct ModerationRouter {
    classifier: Arc<ClassifierClient>,
    actions: ModerationActionService,
}

impl ModerationRouter {
    pub fn new(classifier: Arc<ClassifierClient>, actions: ModerationActionService) -> Self {
        Self { classifier, actions }
    }

    /// Screens one guild message.
    ///
    /// Messages from exempt authors and channels outside the moderated
    /// category are ignored. When the classifier has no provider available
    /// the message is left alone rather than guessed at.
    ///
    /// # Arguments
    /// - `request` - Snapshot of the inbound message
    /// - `category_name` - Name of the channel's parent category, when it
    ///   has one
    pub async fn process(&self, request: ModerationRequest, category_name: Option<&str>) {
        if EXEMPT_AUTHORS.contains(&request.author_id) {
            return;
        }

        if category_name != Some(MODERATED_CATEGORY) {
            return;
        }

        let reply = self
            .classifier
            .classify(&moderation_prompt(&request.content))
            .await;

        if reply == FALLBACK_REPLY {
            tracing::warn!(
                "No classifier available, message {} left unscreened",
                request.message_id
            );
            return;
        }

        self.actions.apply(Verdict::parse(&reply), &request).await;
    }
}

/// Builds the guideline-evaluation prompt around one message.
fn moderation_prompt(content: &str) -> String {
    format!(
        "As the owner of a web development agency Discord server, your focus is on fostering natural \
         discussions, collaboration, and knowledge sharing about web development. Promotions, advertisements, \
         self-promotion, or soliciting — such as offering services, seeking clients, or posting personal \
         project links with commercial intent, or even just saying they are a web developer — are strictly \
         prohibited. Direct requests for services, hiring, or any transactional conversations should be \
         redirected to proper channels. Your task is to evaluate messages and respond with \"DELETE\" for \
         those that break these guidelines, \"REDIRECT\" for clients seeking services, or \"GOOD\" for \
         messages that align with the community's purpose. Message is \"\"\"{content}\"\"\""
    )
}
