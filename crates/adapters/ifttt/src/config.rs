//! IFTTT Maker webhook configuration.

use serde::Deserialize;

/// Which event to fire, and with which key.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IftttConfig {
    /// Maker webhooks key.
    pub api_key: String,
    /// Event name configured in the applet.
    pub event: String,
    /// Service root; only changed for testing.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for IftttConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            event: "bmw_charging".to_string(),
            base_url: "https://maker.ifttt.com".to_string(),
            timeout_secs: 10,
        }
    }
}
