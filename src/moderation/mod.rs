//! AI-assisted moderation of the community category.
//!
//! Inbound messages from moderated channels are classified by racing several
//! upstream AI providers, the winning reply is normalized to a [`Verdict`],
//! and the verdict is applied through best-effort Discord side effects.

pub mod action;
pub mod classifier;
pub mod cleanup;
pub mod gateway;
pub mod request;
pub mod router;
pub mod verdict;

#[cfg(test)]
mod test;

pub use action::ModerationActionService;
pub use classifier::ClassifierClient;
pub use cleanup::NoticeCleanup;
pub use gateway::DiscordGateway;
pub use request::ModerationRequest;
pub use router::ModerationRouter;
pub use verdict::Verdict;
