//! Update reason — why the vehicle last pushed its state.

use serde::{Deserialize, Serialize};

/// What made the car send its last status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UpdateReason {
    /// The car was switched off.
    VehicleShutdown,
    /// The car is being driven.
    VehicleMoving,
    /// Anything else, kept verbatim (e.g. `CHARGING_STARTED`).
    Other(String),
}

impl From<String> for UpdateReason {
    fn from(value: String) -> Self {
        match value.as_str() {
            "VEHICLE_SHUTDOWN" => Self::VehicleShutdown,
            "VEHICLE_MOVING" => Self::VehicleMoving,
            _ => Self::Other(value),
        }
    }
}

impl From<UpdateReason> for String {
    fn from(value: UpdateReason) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for UpdateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VehicleShutdown => f.write_str("VEHICLE_SHUTDOWN"),
            Self::VehicleMoving => f.write_str("VEHICLE_MOVING"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}
