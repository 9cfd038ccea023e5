use std::sync::Arc;
use std::time::Duration;

use crate::moderation::classifier::{ClassifierClient, FALLBACK_REPLY};
use crate::moderation::test::fakes::FakeBackend;

mod classify;
