//! Notification — the outbound effects a rule evaluation can produce.

use serde::{Deserialize, Serialize};

/// Which icon the chat transport should attach to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIcon {
    /// The configured neutral icon (a plug by default).
    #[default]
    Default,
    /// The warning icon.
    Warning,
}

/// A message destined for the chat channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub icon: ChatIcon,
}

impl ChatMessage {
    #[must_use]
    pub fn new(text: impl Into<String>, icon: ChatIcon) -> Self {
        Self {
            text: text.into(),
            icon,
        }
    }
}

/// A named-event dispatch to the automation service. The three values are
/// opaque to the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    pub value1: String,
    pub value2: String,
    pub value3: String,
}

/// One side effect decided by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Post a message to chat.
    Chat(ChatMessage),
    /// Fire the automation event.
    Trigger(TriggerEvent),
    /// Ask the account's remote services to lock the doors.
    LockDoors,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chat(message) => write!(f, "chat({:?})", message.text),
            Self::Trigger(event) => write!(
                f,
                "trigger({}, {}, {})",
                event.value1, event.value2, event.value3
            ),
            Self::LockDoors => f.write_str("lock_doors"),
        }
    }
}
