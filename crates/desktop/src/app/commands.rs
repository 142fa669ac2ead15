//! Async adapters that hand timed work back to the update loop.

use std::time::Duration;

use crate::app::message::{Effect, Message};

pub(crate) const ADDED_NOTICE_TTL: Duration = Duration::from_secs(1);

/// Resolves with `serial` once the add acknowledgement has been on screen
/// long enough. The serial lets the shell drop expiries that a newer add
/// already superseded.
pub(crate) fn expire_notice_command(serial: u64) -> Effect {
    Effect::perform(
        async move {
            tokio::time::sleep(ADDED_NOTICE_TTL).await;
            serial
        },
        Message::AddedNoticeExpired,
    )
}
