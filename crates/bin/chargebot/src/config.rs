//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `chargebot.toml` in the working directory, or wherever
//! `CHARGEBOT_CONFIG` points. Every section has defaults so the file is
//! optional; secrets are usually passed through the environment instead.
//! Environment variables take precedence over file values.

use serde::Deserialize;

use chargebot_adapter_connected_drive::ConnectedDriveConfig;
use chargebot_adapter_ifttt::IftttConfig;
use chargebot_adapter_slack::SlackConfig;
use chargebot_domain::account::Credentials;
use chargebot_domain::settings::NotificationSettings;

const DEFAULT_PATH: &str = "chargebot.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vehicle account login.
    pub account: AccountConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Chat webhook.
    pub slack: SlackConfig,
    /// Automation trigger.
    pub ifttt: IftttConfig,
    /// What to notify about.
    pub notifications: NotificationSettings,
    /// Vehicle API client.
    pub connected_drive: ConnectedDriveConfig,
}

/// Vehicle account login.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub username: String,
    pub password: String,
    /// Country the account is registered in, e.g. `Germany`.
    pub country: String,
}

impl AccountConfig {
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("country", &self.country)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "chargebot=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `chargebot.toml` (or `CHARGEBOT_CONFIG`), then
    /// apply environment-variable overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// the result fails [validation](Self::validate).
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CHARGEBOT_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("CHARGEBOT_USERNAME") {
            self.account.username = val;
        }
        if let Some(val) = var("CHARGEBOT_PASSWORD") {
            self.account.password = val;
        }
        if let Some(val) = var("CHARGEBOT_COUNTRY") {
            self.account.country = val;
        }
        if let Some(val) = var("CHARGEBOT_SLACK_WEBHOOK") {
            self.slack.webhook = val;
        }
        if let Some(val) = var("CHARGEBOT_IFTTT_KEY") {
            self.ifttt.api_key = val;
        }
        if let Some(val) = var("CHARGEBOT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Reject configurations that cannot complete a pass.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.account.username.is_empty() {
            return Err(invalid("account.username must be set"));
        }
        if self.account.country.is_empty() {
            return Err(invalid("account.country must be set"));
        }
        if self.notifications.low_fuel_percent > 100 {
            return Err(invalid("notifications.low_fuel_percent must be at most 100"));
        }
        if self.chat_enabled() && self.slack.webhook.is_empty() {
            return Err(invalid("slack.webhook must be set when chat notifications are enabled"));
        }
        if self.trigger_enabled() && self.ifttt.api_key.is_empty() {
            return Err(invalid("ifttt.api_key must be set when the bad-charge trigger is enabled"));
        }
        Ok(())
    }

    /// Whether any feature posts to chat.
    #[must_use]
    pub fn chat_enabled(&self) -> bool {
        let features = &self.notifications.features;
        features.chat_charging_status || features.chat_door_unlocked || features.chat_low_fuel
    }

    /// Whether the automation trigger is used.
    #[must_use]
    pub fn trigger_enabled(&self) -> bool {
        self.notifications.features.trigger_on_bad_charge
    }

    /// Log the effective configuration with secrets redacted.
    pub fn trace(&self) {
        tracing::debug!(
            account = ?self.account,
            country = %self.account.country,
            slack.channel = %self.slack.channel,
            slack.username = %self.slack.username,
            slack.webhook = redact(&self.slack.webhook),
            ifttt.event = %self.ifttt.event,
            ifttt.api_key = redact(&self.ifttt.api_key),
            notifications = ?self.notifications,
            connected_drive.server = ?self.connected_drive.server,
            "configuration loaded"
        );
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Validation(reason.to_string())
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
