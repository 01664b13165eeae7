use async_trait::async_trait;
use precis_core::{Message, PrecisError, Transcript};
use tokio_util::sync::CancellationToken;

use crate::MessageReducer;

/// Keeps only the most recent `max_messages` turns, optionally preserving a
/// leading system message.
///
/// Drops the oldest turns outright instead of summarizing them; no
/// generation call is made.
pub struct RollingReducer {
    max_messages: usize,
    preserve_system: bool,
}

impl RollingReducer {
    pub fn new(max_messages: usize) -> Self {
        Self {
            max_messages,
            preserve_system: true,
        }
    }

    pub fn with_preserve_system(mut self, preserve: bool) -> Self {
        self.preserve_system = preserve;
        self
    }
}

#[async_trait]
impl MessageReducer for RollingReducer {
    async fn reduce(
        &self,
        transcript: &mut Transcript,
        _cancel: &CancellationToken,
    ) -> Result<bool, PrecisError> {
        if transcript.len() <= self.max_messages {
            return Ok(false);
        }

        let messages = transcript.messages();
        let kept = if self.preserve_system && messages.first().is_some_and(Message::is_system) {
            let keep = self.max_messages.saturating_sub(1);
            let rest = &messages[1..];
            let start = rest.len().saturating_sub(keep);
            let mut kept = vec![messages[0].clone()];
            kept.extend_from_slice(&rest[start..]);
            kept
        } else {
            let start = messages.len() - self.max_messages;
            messages[start..].to_vec()
        };

        let dropped = transcript.len() - kept.len();
        *transcript = Transcript::from(kept);
        tracing::debug!("dropped {dropped} oldest turns");

        Ok(true)
    }
}
