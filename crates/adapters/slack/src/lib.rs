//! # chargebot-adapter-slack
//!
//! Chat adapter — posts notifications to a Slack-compatible incoming webhook.
//!
//! Every message is a single `POST` with a JSON body
//! `{channel, icon_emoji, username, text}`. Anything but a 2xx answer is
//! reported as a failure.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `chargebot-app` and `chargebot-domain`.

mod config;
mod error;

pub use config::SlackConfig;
pub use error::SlackError;

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use url::Url;

use chargebot_app::ports::ChatNotifier;
use chargebot_domain::error::ChargebotError;
use chargebot_domain::notification::{ChatIcon, ChatMessage};

/// Body of an incoming-webhook request.
#[derive(Debug, Serialize)]
struct Payload<'a> {
    channel: &'a str,
    icon_emoji: &'a str,
    username: &'a str,
    text: &'a str,
}

/// [`ChatNotifier`] backed by a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    client: Client,
    webhook: Url,
    config: SlackConfig,
}

impl SlackNotifier {
    /// Create a notifier for the configured webhook.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::InvalidUrl`] when the webhook is not a URL, or
    /// [`SlackError::Http`] when the HTTP client cannot be built.
    pub fn new(config: SlackConfig) -> Result<Self, SlackError> {
        let webhook = Url::parse(&config.webhook)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            webhook,
            config,
        })
    }

    fn icon(&self, icon: ChatIcon) -> &str {
        match icon {
            ChatIcon::Default => &self.config.icon,
            ChatIcon::Warning => &self.config.warning_icon,
        }
    }

    async fn post(&self, message: &ChatMessage) -> Result<(), SlackError> {
        let payload = Payload {
            channel: &self.config.channel,
            icon_emoji: self.icon(message.icon),
            username: &self.config.username,
            text: &message.text,
        };

        let response = self
            .client
            .post(self.webhook.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::Status { status, body });
        }

        tracing::debug!(channel = %self.config.channel, "chat message posted");
        Ok(())
    }
}

impl ChatNotifier for SlackNotifier {
    async fn send(&self, message: &ChatMessage) -> Result<(), ChargebotError> {
        self.post(message).await.map_err(ChargebotError::from)
    }
}
