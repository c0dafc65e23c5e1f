//! Charging status — the high-voltage battery's charge state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnmappedStatus;

/// Charge state reported by the vehicle.
///
/// The set is closed: a value outside it is rejected when parsed instead of
/// being mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum ChargingStatus {
    Charging,
    Error,
    FinishedFullyCharged,
    FinishedNotFull,
    Invalid,
    NotCharging,
    WaitingForCharging,
}

impl ChargingStatus {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Charging,
        Self::Error,
        Self::FinishedFullyCharged,
        Self::FinishedNotFull,
        Self::Invalid,
        Self::NotCharging,
        Self::WaitingForCharging,
    ];

    /// Wire name, e.g. `"FINISHED_NOT_FULL"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Charging => "CHARGING",
            Self::Error => "ERROR",
            Self::FinishedFullyCharged => "FINISHED_FULLY_CHARGED",
            Self::FinishedNotFull => "FINISHED_NOT_FULL",
            Self::Invalid => "INVALID",
            Self::NotCharging => "NOT_CHARGING",
            Self::WaitingForCharging => "WAITING_FOR_CHARGING",
        }
    }

    /// Human phrase that completes "Your BMW is …".
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Charging => "charging",
            Self::Error => "not charging due to an error",
            Self::FinishedFullyCharged => "completely charged",
            Self::FinishedNotFull => "done charging but not full",
            Self::Invalid => "probably not charging",
            Self::NotCharging => "not charging",
            Self::WaitingForCharging => "waiting to charge",
        }
    }
}

impl std::fmt::Display for ChargingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChargingStatus {
    type Err = UnmappedStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnmappedStatus {
                kind: "charging status",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for ChargingStatus {
    type Error = UnmappedStatus;

    fn try_from(value: String) -> Result<Self, UnmappedStatus> {
        value.parse()
    }
}
