//! Status report — the human-readable and derived fields of a snapshot.

use chrono::TimeDelta;

use crate::error::SnapshotError;
use crate::time::format_hms;
use crate::vehicle::{ChargingStatus, Distance, UpdateReason, VehicleSnapshot};

/// Text used when the car does not report a charging time.
pub const UNKNOWN_TIME_REMAINING: &str = "Unknown";

/// Fields derived from one [`VehicleSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Phrase completing "Your BMW is …".
    pub status_phrase: &'static str,
    pub battery_percent: u8,
    /// `H:MM:SS`, or [`UNKNOWN_TIME_REMAINING`].
    pub time_remaining: String,
    pub fuel_percent: u32,
    /// Total drivable distance on fuel and electricity.
    pub range: Distance,
}

impl StatusReport {
    /// Derive the report.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::DivisionByZero`] when the tank capacity is zero.
    pub fn from_snapshot(snapshot: &VehicleSnapshot) -> Result<Self, SnapshotError> {
        Ok(Self {
            status_phrase: humanize(snapshot.charging_status, &snapshot.update_reason),
            battery_percent: snapshot.battery_percent,
            time_remaining: time_remaining_text(snapshot.charging_time_remaining),
            fuel_percent: fuel_percent(snapshot.remaining_fuel, snapshot.max_fuel)?,
            range: total_range(snapshot.remaining_range_fuel, snapshot.max_range_electric),
        })
    }
}

/// Phrase for a charging status, refined by the update reason when the
/// status is [`ChargingStatus::Invalid`].
#[must_use]
pub fn humanize(status: ChargingStatus, reason: &UpdateReason) -> &'static str {
    match (status, reason) {
        (ChargingStatus::Invalid, UpdateReason::VehicleShutdown) => "parked, not charging",
        (ChargingStatus::Invalid, UpdateReason::VehicleMoving) => "being driven, not charging",
        _ => status.phrase(),
    }
}

/// `floor(remaining / max * 100)`.
///
/// # Errors
///
/// Returns [`SnapshotError::DivisionByZero`] when `max` is zero.
pub fn fuel_percent(remaining: u32, max: u32) -> Result<u32, SnapshotError> {
    if max == 0 {
        return Err(SnapshotError::DivisionByZero {
            metric: "fuel percentage",
        });
    }
    let percent = u64::from(remaining) * 100 / u64::from(max);
    Ok(u32::try_from(percent).unwrap_or(u32::MAX))
}

/// Fuel range plus electric range. The unit is taken from the fuel range.
#[must_use]
pub fn total_range(fuel: Distance, electric: Distance) -> Distance {
    Distance::new(fuel.value.saturating_add(electric.value), fuel.unit)
}

/// Charging time as shown to humans.
#[must_use]
pub fn time_remaining_text(remaining: Option<TimeDelta>) -> String {
    remaining.map_or_else(|| UNKNOWN_TIME_REMAINING.to_string(), format_hms)
}
