//! Notifier ports — outbound message transports.

use std::future::Future;

use chargebot_domain::error::ChargebotError;
use chargebot_domain::notification::{ChatMessage, TriggerEvent};

/// Posts messages to a chat channel.
pub trait ChatNotifier {
    /// Deliver one message. Any non-success answer from the channel is an error.
    fn send(&self, message: &ChatMessage)
    -> impl Future<Output = Result<(), ChargebotError>> + Send;
}

/// Fires named events on a rule-automation service.
pub trait AutomationTrigger {
    /// Fire the configured event carrying the three values.
    fn fire(&self, event: &TriggerEvent) -> impl Future<Output = Result<(), ChargebotError>> + Send;
}

impl<T: ChatNotifier + Send + Sync> ChatNotifier for std::sync::Arc<T> {
    fn send(
        &self,
        message: &ChatMessage,
    ) -> impl Future<Output = Result<(), ChargebotError>> + Send {
        (**self).send(message)
    }
}

impl<T: AutomationTrigger + Send + Sync> AutomationTrigger for std::sync::Arc<T> {
    fn fire(&self, event: &TriggerEvent) -> impl Future<Output = Result<(), ChargebotError>> + Send {
        (**self).fire(event)
    }
}

/// An unconfigured transport. Any use is a failure.
impl<T: ChatNotifier + Sync> ChatNotifier for Option<T> {
    async fn send(&self, message: &ChatMessage) -> Result<(), ChargebotError> {
        match self {
            Some(inner) => inner.send(message).await,
            None => Err(ChargebotError::Transport("chat is not configured".into())),
        }
    }
}

/// An unconfigured transport. Any use is a failure.
impl<T: AutomationTrigger + Sync> AutomationTrigger for Option<T> {
    async fn fire(&self, event: &TriggerEvent) -> Result<(), ChargebotError> {
        match self {
            Some(inner) => inner.fire(event).await,
            None => Err(ChargebotError::Transport(
                "automation trigger is not configured".into(),
            )),
        }
    }
}
