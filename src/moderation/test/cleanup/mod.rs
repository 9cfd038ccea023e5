use std::sync::Arc;
use std::time::Duration;

use serenity::all::{ChannelId, MessageId};

use crate::moderation::cleanup::NoticeCleanup;
use crate::moderation::test::fakes::FakeGateway;

mod schedule;
mod shutdown;
