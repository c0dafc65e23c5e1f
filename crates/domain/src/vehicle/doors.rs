//! Door lock state and per-door positions.

use serde::{Deserialize, Serialize};

/// Central locking state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LockState {
    Locked,
    Secured,
    Unlocked,
    /// Any state the API reports that is not one of the above
    /// (e.g. `SELECTIVE_LOCKED`).
    Other(String),
}

impl LockState {
    /// Whether the car counts as locked. Everything but
    /// [`Locked`](Self::Locked) and [`Secured`](Self::Secured) is insecure.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Locked | Self::Secured)
    }
}

impl From<String> for LockState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LOCKED" => Self::Locked,
            "SECURED" => Self::Secured,
            "UNLOCKED" => Self::Unlocked,
            _ => Self::Other(value),
        }
    }
}

impl From<LockState> for String {
    fn from(value: LockState) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for LockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locked => f.write_str("LOCKED"),
            Self::Secured => f.write_str("SECURED"),
            Self::Unlocked => f.write_str("UNLOCKED"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Open/closed state of a single door, window or lid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DoorPosition {
    Open,
    Closed,
    #[default]
    Unknown,
    Other(String),
}

impl From<String> for DoorPosition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OPEN" => Self::Open,
            "CLOSED" => Self::Closed,
            "" | "UNKNOWN" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<DoorPosition> for String {
    fn from(value: DoorPosition) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for DoorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => f.write_str("OPEN"),
            Self::Closed => f.write_str("CLOSED"),
            Self::Unknown => f.write_str("UNKNOWN"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Position of every door and lid on the car.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorStates {
    pub driver_front: DoorPosition,
    pub driver_rear: DoorPosition,
    pub passenger_front: DoorPosition,
    pub passenger_rear: DoorPosition,
    pub trunk: DoorPosition,
    pub hood: DoorPosition,
}

impl DoorStates {
    /// Names of the doors and lids currently reported as open.
    #[must_use]
    pub fn open(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, position)| **position == DoorPosition::Open)
            .map(|(name, _)| name)
            .collect()
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &DoorPosition)> {
        [
            ("driver_front", &self.driver_front),
            ("driver_rear", &self.driver_rear),
            ("passenger_front", &self.passenger_front),
            ("passenger_rear", &self.passenger_rear),
            ("trunk", &self.trunk),
            ("hood", &self.hood),
        ]
        .into_iter()
    }
}

impl std::fmt::Display for DoorStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, (name, position)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={position}")?;
        }
        Ok(())
    }
}
