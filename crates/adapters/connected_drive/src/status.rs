//! Wire shapes of the vehicle endpoints and their mapping to domain types.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

use chargebot_domain::time::Timestamp;
use chargebot_domain::vehicle::{
    ChargingStatus, Distance, DistanceUnit, DoorPosition, DoorStates, GpsPosition, LockState,
    UpdateReason, Vehicle, VehicleSnapshot,
};

use crate::error::ConnectedDriveError;

/// Body of the token endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// One entry of `GET /webapi/v1/user/vehicles`.
#[derive(Debug, Deserialize)]
pub(crate) struct VehicleEntry {
    pub vin: String,
    #[serde(default)]
    pub model: String,
}

impl From<VehicleEntry> for Vehicle {
    fn from(entry: VehicleEntry) -> Self {
        Self {
            vin: entry.vin,
            model: entry.model,
        }
    }
}

/// Body of `GET /webapi/v1/user/vehicles/{vin}/status`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusResponse {
    pub vehicle_status: VehicleStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Position {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VehicleStatus {
    pub update_time: String,
    pub update_reason: UpdateReason,
    #[serde(default)]
    pub position: Option<Position>,
    pub charging_status: String,
    pub charging_level_hv: u8,
    /// Minutes.
    #[serde(default)]
    pub charging_time_remaining: Option<f64>,
    pub door_lock_state: LockState,
    #[serde(default)]
    pub door_driver_front: DoorPosition,
    #[serde(default)]
    pub door_driver_rear: DoorPosition,
    #[serde(default)]
    pub door_passenger_front: DoorPosition,
    #[serde(default)]
    pub door_passenger_rear: DoorPosition,
    #[serde(default)]
    pub trunk: DoorPosition,
    #[serde(default)]
    pub hood: DoorPosition,
    #[serde(default)]
    pub remaining_fuel: f64,
    #[serde(default)]
    pub max_fuel: Option<f64>,
    #[serde(default)]
    pub remaining_range_fuel: f64,
    #[serde(default)]
    pub remaining_range_fuel_mls: Option<f64>,
    #[serde(default)]
    pub max_range_electric: f64,
    #[serde(default)]
    pub max_range_electric_mls: Option<f64>,
}

impl VehicleStatus {
    /// Map onto a domain snapshot.
    ///
    /// Distances are taken from the mile fields when `unit` is miles and the
    /// API supplied them. `tank_capacity` fills in a missing `maxFuel`; with
    /// neither the status is rejected.
    pub fn into_snapshot(
        self,
        unit: DistanceUnit,
        tank_capacity: Option<u32>,
    ) -> Result<VehicleSnapshot, ConnectedDriveError> {
        let charging_status: ChargingStatus = self.charging_status.parse()?;
        let timestamp = parse_update_time(&self.update_time)?;

        let miles = (self.remaining_range_fuel_mls, self.max_range_electric_mls);
        let (fuel_range, electric_range, unit) = match (unit, miles) {
            (DistanceUnit::Mi, (Some(fuel), Some(electric))) => (fuel, electric, DistanceUnit::Mi),
            _ => (
                self.remaining_range_fuel,
                self.max_range_electric,
                DistanceUnit::Km,
            ),
        };

        let max_fuel = self
            .max_fuel
            .map(whole)
            .or(tank_capacity)
            .ok_or(ConnectedDriveError::MissingTankCapacity)?;

        Ok(VehicleSnapshot {
            timestamp,
            update_reason: self.update_reason,
            position: self
                .position
                .map(|p| GpsPosition {
                    latitude: p.lat,
                    longitude: p.lon,
                })
                .unwrap_or_default(),
            charging_status,
            battery_percent: self.charging_level_hv.min(100),
            charging_time_remaining: self.charging_time_remaining.map(minutes),
            lock_state: self.door_lock_state,
            doors: DoorStates {
                driver_front: self.door_driver_front,
                driver_rear: self.door_driver_rear,
                passenger_front: self.door_passenger_front,
                passenger_rear: self.door_passenger_rear,
                trunk: self.trunk,
                hood: self.hood,
            },
            remaining_fuel: whole(self.remaining_fuel),
            max_fuel,
            remaining_range_fuel: Distance::new(whole(fuel_range), unit),
            max_range_electric: Distance::new(whole(electric_range), unit),
        })
    }
}

/// `2018-03-04T15:10:37+0000`, or RFC 3339.
fn parse_update_time(raw: &str) -> Result<Timestamp, ConnectedDriveError> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|time| time.with_timezone(&Utc))
        .map_err(|_| ConnectedDriveError::InvalidTimestamp(raw.to_string()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u32 {
    if value.is_finite() {
        value.round().clamp(0.0, f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[allow(clippy::cast_possible_truncation)]
fn minutes(value: f64) -> TimeDelta {
    let seconds = (value.max(0.0) * 60.0).round();
    TimeDelta::try_seconds(seconds as i64).unwrap_or(TimeDelta::MAX)
}
