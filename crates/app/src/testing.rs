//! In-memory port implementations shared by the unit tests.

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::{TimeDelta, TimeZone, Utc};

use chargebot_domain::account::{Credentials, Region};
use chargebot_domain::error::{ChargebotError, UnknownCountryError};
use chargebot_domain::notification::{ChatMessage, TriggerEvent};
use chargebot_domain::settings::{FeatureFlags, NotificationSettings};
use chargebot_domain::vehicle::{
    ChargingStatus, Distance, DistanceUnit, DoorStates, GpsPosition, LockState, UpdateReason,
    Vehicle, VehicleSnapshot,
};

use crate::ports::{AccountConnector, AutomationTrigger, ChatNotifier, RegionResolver, VehicleAccount};

// ── Fixtures ───────────────────────────────────────────────────

pub fn vehicle() -> Vehicle {
    Vehicle {
        vin: "WBY1Z21000V000001".to_string(),
        model: "i3 94 (+ REX)".to_string(),
    }
}

/// Healthy car: charging at 80 %, secured, tank 8 of 9 litres.
pub fn snapshot() -> VehicleSnapshot {
    VehicleSnapshot {
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap(),
        update_reason: UpdateReason::Other("CHARGING_STARTED".to_string()),
        position: GpsPosition {
            latitude: 48.177,
            longitude: 11.556,
        },
        charging_status: ChargingStatus::Charging,
        battery_percent: 80,
        charging_time_remaining: Some(TimeDelta::minutes(45)),
        lock_state: LockState::Secured,
        doors: DoorStates::default(),
        remaining_fuel: 8,
        max_fuel: 9,
        remaining_range_fuel: Distance::new(100, DistanceUnit::Km),
        max_range_electric: Distance::new(150, DistanceUnit::Km),
    }
}

pub fn settings_with(features: FeatureFlags) -> NotificationSettings {
    NotificationSettings {
        bad_statuses: BTreeSet::from([ChargingStatus::Error, ChargingStatus::Invalid]),
        low_fuel_percent: 15,
        features,
    }
}

// ── Log capture ────────────────────────────────────────────────

/// Collects formatted log lines for assertions.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn transport_error(reason: &str) -> ChargebotError {
    ChargebotError::Transport(Box::new(std::io::Error::other(reason.to_string())))
}

// ── Spy chat ───────────────────────────────────────────────────

/// Records every attempt; fails the first `fail_first` of them.
#[derive(Default)]
pub struct SpyChat {
    attempts: Mutex<Vec<ChatMessage>>,
    fail_first: usize,
}

impl SpyChat {
    pub fn failing_first(fail_first: usize) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail_first,
        }
    }

    pub fn attempts(&self) -> Vec<ChatMessage> {
        self.attempts.lock().unwrap().clone()
    }
}

impl ChatNotifier for SpyChat {
    fn send(
        &self,
        message: &ChatMessage,
    ) -> impl Future<Output = Result<(), ChargebotError>> + Send {
        let mut attempts = self.attempts.lock().unwrap();
        attempts.push(message.clone());
        let result = if attempts.len() <= self.fail_first {
            Err(transport_error("webhook answered 500"))
        } else {
            Ok(())
        };
        async { result }
    }
}

// ── Spy trigger ────────────────────────────────────────────────

#[derive(Default)]
pub struct SpyTrigger {
    fired: Mutex<Vec<TriggerEvent>>,
    failing: bool,
}

impl SpyTrigger {
    pub fn failing() -> Self {
        Self {
            fired: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn fired(&self) -> Vec<TriggerEvent> {
        self.fired.lock().unwrap().clone()
    }
}

impl AutomationTrigger for SpyTrigger {
    fn fire(&self, event: &TriggerEvent) -> impl Future<Output = Result<(), ChargebotError>> + Send {
        self.fired.lock().unwrap().push(event.clone());
        let result = if self.failing {
            Err(transport_error("maker service unavailable"))
        } else {
            Ok(())
        };
        async { result }
    }
}

// ── Fake account ───────────────────────────────────────────────

pub struct FakeAccount {
    vehicles: Vec<Vehicle>,
    snapshot: VehicleSnapshot,
    locks: Mutex<Vec<String>>,
    fail_lock: bool,
    fail_refresh: bool,
    fail_vehicles: bool,
}

impl FakeAccount {
    pub fn with(snapshot: VehicleSnapshot) -> Self {
        Self {
            vehicles: vec![vehicle()],
            snapshot,
            locks: Mutex::new(Vec::new()),
            fail_lock: false,
            fail_refresh: false,
            fail_vehicles: false,
        }
    }

    pub fn with_vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = vehicles;
        self
    }

    pub fn failing_lock(mut self) -> Self {
        self.fail_lock = true;
        self
    }

    pub fn failing_refresh(mut self) -> Self {
        self.fail_refresh = true;
        self
    }

    pub fn failing_vehicles(mut self) -> Self {
        self.fail_vehicles = true;
        self
    }

    pub fn locks(&self) -> Vec<String> {
        self.locks.lock().unwrap().clone()
    }
}

impl VehicleAccount for FakeAccount {
    fn vehicles(&self) -> impl Future<Output = Result<Vec<Vehicle>, ChargebotError>> + Send {
        let result = if self.fail_vehicles {
            Err(transport_error("vehicle list unavailable"))
        } else {
            Ok(self.vehicles.clone())
        };
        async { result }
    }

    fn refresh_state(
        &self,
        _vehicle: &Vehicle,
    ) -> impl Future<Output = Result<VehicleSnapshot, ChargebotError>> + Send {
        let result = if self.fail_refresh {
            Err(transport_error("status endpoint timed out"))
        } else {
            Ok(self.snapshot.clone())
        };
        async { result }
    }

    fn lock_doors(
        &self,
        vehicle: &Vehicle,
    ) -> impl Future<Output = Result<(), ChargebotError>> + Send {
        self.locks.lock().unwrap().push(vehicle.vin.clone());
        let result = if self.fail_lock {
            Err(transport_error("remote service rejected"))
        } else {
            Ok(())
        };
        async { result }
    }
}

/// Hands out a prepared account, or refuses to log in.
pub struct FakeConnector {
    account: Mutex<Option<FakeAccount>>,
    connects: Mutex<Vec<(String, Region)>>,
}

impl FakeConnector {
    pub fn accepting(account: FakeAccount) -> Self {
        Self {
            account: Mutex::new(Some(account)),
            connects: Mutex::new(Vec::new()),
        }
    }

    pub fn refusing() -> Self {
        Self {
            account: Mutex::new(None),
            connects: Mutex::new(Vec::new()),
        }
    }

    pub fn connects(&self) -> Vec<(String, Region)> {
        self.connects.lock().unwrap().clone()
    }
}

impl AccountConnector for FakeConnector {
    type Account = FakeAccount;

    fn connect(
        &self,
        credentials: &Credentials,
        region: Region,
    ) -> impl Future<Output = Result<FakeAccount, ChargebotError>> + Send {
        self.connects
            .lock()
            .unwrap()
            .push((credentials.username.clone(), region));
        let result = self.account.lock().unwrap().take().ok_or_else(|| {
            ChargebotError::Authentication(Box::new(std::io::Error::other("bad password")))
        });
        async { result }
    }
}

/// Knows a single country.
pub struct SingleCountryResolver(pub &'static str, pub Region);

impl RegionResolver for SingleCountryResolver {
    fn resolve(&self, country: &str) -> Result<Region, ChargebotError> {
        if country == self.0 {
            Ok(self.1)
        } else {
            Err(UnknownCountryError(country.to_string()).into())
        }
    }
}
