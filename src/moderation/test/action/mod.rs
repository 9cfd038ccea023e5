use std::sync::Arc;

use serenity::all::{ChannelId, MessageId, RoleId};

use crate::moderation::action::{ModerationActionService, NOTICE_LIFETIME};
use crate::moderation::cleanup::NoticeCleanup;
use crate::moderation::test::fakes::{sample_request, FakeGateway};
use crate::moderation::verdict::Verdict;

mod allow;
mod delete;
mod redirect;

/// Channel the service posts deletion audits to.
const DELETION_LOG: ChannelId = ChannelId::new(1352513103333560340);
/// Channel the service posts lead alerts to.
const LEAD_CHANNEL: ChannelId = ChannelId::new(1352511817376731187);
