//! Notification settings — what the rules consider worth reporting.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::vehicle::ChargingStatus;

/// Immutable input to [`evaluate`](crate::rules::evaluate), built once at
/// startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Charging states that fire the automation trigger.
    pub bad_statuses: BTreeSet<ChargingStatus>,
    /// Fuel level (percent, inclusive) at or below which the low-fuel alert fires.
    pub low_fuel_percent: u8,
    /// Per-rule switches.
    pub features: FeatureFlags,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            bad_statuses: BTreeSet::from([ChargingStatus::Error, ChargingStatus::Invalid]),
            low_fuel_percent: 15,
            features: FeatureFlags::default(),
        }
    }
}

/// Independent switches, one per notification or action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FeatureFlags {
    /// Fire the automation event when the charging status is bad.
    pub trigger_on_bad_charge: bool,
    /// Post the charging summary to chat.
    pub chat_charging_status: bool,
    /// Post an alert to chat when the doors are not locked.
    pub chat_door_unlocked: bool,
    /// Send the remote door-lock command when the doors are not locked.
    pub lock_on_unlocked: bool,
    /// Post an alert to chat when fuel is low.
    pub chat_low_fuel: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            trigger_on_bad_charge: true,
            chat_charging_status: true,
            chat_door_unlocked: true,
            lock_on_unlocked: false,
            chat_low_fuel: true,
        }
    }
}

impl FeatureFlags {
    /// Every switch off.
    #[must_use]
    pub fn none() -> Self {
        Self {
            trigger_on_bad_charge: false,
            chat_charging_status: false,
            chat_door_unlocked: false,
            lock_on_unlocked: false,
            chat_low_fuel: false,
        }
    }

    /// Every switch on.
    #[must_use]
    pub fn all() -> Self {
        Self {
            trigger_on_bad_charge: true,
            chat_charging_status: true,
            chat_door_unlocked: true,
            lock_on_unlocked: true,
            chat_low_fuel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let settings = NotificationSettings::default();
        assert!(settings.bad_statuses.contains(&ChargingStatus::Error));
        assert!(settings.bad_statuses.contains(&ChargingStatus::Invalid));
        assert_eq!(settings.low_fuel_percent, 15);
        assert!(settings.features.chat_charging_status);
        assert!(!settings.features.lock_on_unlocked);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            bad_statuses = ["ERROR", "NOT_CHARGING"]
            low_fuel_percent = 20

            [features]
            trigger_on_bad_charge = false
            lock_on_unlocked = true
        "#;
        let settings: NotificationSettings = toml::from_str(toml).unwrap();
        assert_eq!(
            settings.bad_statuses,
            BTreeSet::from([ChargingStatus::Error, ChargingStatus::NotCharging])
        );
        assert_eq!(settings.low_fuel_percent, 20);
        assert!(!settings.features.trigger_on_bad_charge);
        assert!(settings.features.lock_on_unlocked);
        assert!(settings.features.chat_low_fuel);
    }

    #[test]
    fn should_reject_unknown_bad_status() {
        let toml = r#"bad_statuses = ["UNPLUGGED"]"#;
        let result: Result<NotificationSettings, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
