//! Slack webhook configuration.

use serde::Deserialize;

/// Where and as whom chat messages are posted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// Incoming-webhook URL.
    pub webhook: String,
    /// Channel to post into, without the leading `#`.
    pub channel: String,
    /// Emoji shortcode for regular messages.
    pub icon: String,
    /// Emoji shortcode for warnings.
    pub warning_icon: String,
    /// Display name of the bot.
    pub username: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook: String::new(),
            channel: "notifications".to_string(),
            icon: ":electric_plug:".to_string(),
            warning_icon: ":warning:".to_string(),
            username: "chargebot".to_string(),
            timeout_secs: 10,
        }
    }
}
