//! Vehicle — a car on the account and a point-in-time read of its telemetry.

mod charging;
mod doors;
mod update_reason;

pub use charging::ChargingStatus;
pub use doors::{DoorPosition, DoorStates, LockState};
pub use update_reason::UpdateReason;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// A car registered on the vehicle account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle identification number.
    pub vin: String,
    /// Model name as shown by the account, e.g. `"i3 94 (+ REX)"`.
    pub model: String,
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.model, self.vin)
    }
}

/// Last known GPS position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GpsPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl std::fmt::Display for GpsPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Length unit used by the account's region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Mi,
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Km => f.write_str("km"),
            Self::Mi => f.write_str("mi"),
        }
    }
}

/// A non-negative drivable distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Distance {
    pub value: u32,
    pub unit: DistanceUnit,
}

impl Distance {
    #[must_use]
    pub fn new(value: u32, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Point-in-time read of a vehicle's state.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshot {
    /// When the car last pushed its state.
    pub timestamp: Timestamp,
    pub update_reason: UpdateReason,
    pub position: GpsPosition,
    pub charging_status: ChargingStatus,
    /// High-voltage battery level, 0–100.
    pub battery_percent: u8,
    /// `None` when the car does not know (e.g. not plugged in).
    pub charging_time_remaining: Option<TimeDelta>,
    pub lock_state: LockState,
    pub doors: DoorStates,
    /// Fuel left in the tank, in litres (or gallons).
    pub remaining_fuel: u32,
    /// Tank capacity, same unit as `remaining_fuel`. Must be non-zero.
    pub max_fuel: u32,
    pub remaining_range_fuel: Distance,
    pub max_range_electric: Distance,
}
