//! ConnectedDrive configuration.

use serde::Deserialize;

/// Client settings for the vehicle API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectedDriveConfig {
    /// Replace the region's API root (e.g. to talk to a local mock).
    pub server: Option<String>,
    /// `Authorization` header value for the token request, if the region
    /// requires a client secret.
    pub oauth_authorization: Option<String>,
    /// Tank capacity used when the status does not report one.
    pub tank_capacity: Option<u32>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ConnectedDriveConfig {
    fn default() -> Self {
        Self {
            server: None,
            oauth_authorization: None,
            tank_capacity: None,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = ConnectedDriveConfig::default();
        assert!(config.server.is_none());
        assert!(config.tank_capacity.is_none());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            server = "http://localhost:8080"
            tank_capacity = 9
        "#;
        let config: ConnectedDriveConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.tank_capacity, Some(9));
        assert_eq!(config.timeout_secs, 30);
    }
}
