//! # chargebot-adapter-ifttt
//!
//! Automation trigger adapter — fires an event on IFTTT's Maker webhooks
//! service: `POST {base}/trigger/{event}/with/key/{key}` with a JSON body
//! carrying `value1`, `value2` and `value3`.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `chargebot-app` and `chargebot-domain`.

mod config;
mod error;

pub use config::IftttConfig;
pub use error::IftttError;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use chargebot_app::ports::AutomationTrigger;
use chargebot_domain::error::ChargebotError;
use chargebot_domain::notification::TriggerEvent;

/// [`AutomationTrigger`] backed by IFTTT Maker webhooks.
#[derive(Debug, Clone)]
pub struct IftttTrigger {
    client: Client,
    url: Url,
    event: String,
}

impl IftttTrigger {
    /// Create a trigger for the configured event.
    ///
    /// # Errors
    ///
    /// Returns [`IftttError::InvalidUrl`] when the base URL is malformed, or
    /// [`IftttError::Http`] when the HTTP client cannot be built.
    pub fn new(config: &IftttConfig) -> Result<Self, IftttError> {
        let url = trigger_url(&config.base_url, &config.event, &config.api_key)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url,
            event: config.event.clone(),
        })
    }

    async fn post(&self, event: &TriggerEvent) -> Result<(), IftttError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(event)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IftttError::Status { status, body });
        }

        tracing::debug!(event = %self.event, "automation event fired");
        Ok(())
    }
}

impl AutomationTrigger for IftttTrigger {
    async fn fire(&self, event: &TriggerEvent) -> Result<(), ChargebotError> {
        self.post(event).await.map_err(ChargebotError::from)
    }
}

/// `{base}/trigger/{event}/with/key/{key}`, with each segment escaped.
fn trigger_url(base: &str, event: &str, key: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(["trigger", event, "with", "key", key]);
    Ok(url)
}
