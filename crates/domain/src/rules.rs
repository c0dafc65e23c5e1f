//! Rules — decide which notifications and actions a snapshot deserves.
//!
//! Four independent rules are evaluated against the same snapshot, always
//! in this order:
//!
//! - **A** automation event when the charging status is in the bad set
//! - **B** chat summary of the charge
//! - **C** chat alert and/or remote lock when the doors are not locked
//! - **D** chat alert when fuel is low
//!
//! No rule looks at the outcome of another, and nothing is remembered
//! between evaluations: a bad status fires rule A on every run.

use crate::error::ChargebotError;
use crate::notification::{Action, ChatIcon, ChatMessage, TriggerEvent};
use crate::report::StatusReport;
use crate::settings::NotificationSettings;
use crate::vehicle::VehicleSnapshot;

/// Below this battery level the summary uses the warning icon.
pub const LOW_BATTERY_PERCENT: u8 = 50;

/// From this battery level on the summary leaves out the charging time.
pub const NEARLY_FULL_PERCENT: u8 = 95;

/// Text of the unlocked-doors alert.
pub const UNLOCKED_MESSAGE: &str = "Your BMW is not locked!";

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub report: StatusReport,
    /// Actions in rule order (A, B, C, D).
    pub actions: Vec<Action>,
}

/// Evaluate every rule against one snapshot.
///
/// # Errors
///
/// Returns [`ChargebotError::InvalidSnapshot`] when derived metrics cannot
/// be computed (zero tank capacity).
pub fn evaluate(
    snapshot: &VehicleSnapshot,
    settings: &NotificationSettings,
) -> Result<Evaluation, ChargebotError> {
    let report = StatusReport::from_snapshot(snapshot)?;
    let features = &settings.features;
    let mut actions = Vec::new();

    if features.trigger_on_bad_charge && settings.bad_statuses.contains(&snapshot.charging_status)
    {
        actions.push(Action::Trigger(bad_charge_event(&report)));
    }

    if features.chat_charging_status {
        actions.push(Action::Chat(charging_summary(&report)));
    }

    if !snapshot.lock_state.is_secure() {
        if features.chat_door_unlocked {
            actions.push(Action::Chat(ChatMessage::new(
                UNLOCKED_MESSAGE,
                ChatIcon::Warning,
            )));
        }
        if features.lock_on_unlocked {
            actions.push(Action::LockDoors);
        }
    }

    if features.chat_low_fuel && report.fuel_percent <= u32::from(settings.low_fuel_percent) {
        actions.push(Action::Chat(low_fuel_alert(report.fuel_percent)));
    }

    Ok(Evaluation { report, actions })
}

/// Payload of rule A: phrase, battery level, time remaining.
#[must_use]
pub fn bad_charge_event(report: &StatusReport) -> TriggerEvent {
    TriggerEvent {
        value1: report.status_phrase.to_string(),
        value2: report.battery_percent.to_string(),
        value3: report.time_remaining.clone(),
    }
}

/// Message of rule B.
#[must_use]
pub fn charging_summary(report: &StatusReport) -> ChatMessage {
    let icon = if report.battery_percent < LOW_BATTERY_PERCENT {
        ChatIcon::Warning
    } else {
        ChatIcon::Default
    };

    let mut text = format!("Your BMW is {}.", report.status_phrase);
    text.push_str(&format!(" Its battery is {}% full.", report.battery_percent));
    if report.battery_percent < NEARLY_FULL_PERCENT {
        text.push_str(&format!(
            " {} remains till fully charged.",
            report.time_remaining
        ));
    }
    text.push_str(&format!(
        " It can drive {} before it needs charging or fuel.",
        report.range
    ));

    ChatMessage::new(text, icon)
}

/// Message of rule D.
#[must_use]
pub fn low_fuel_alert(fuel_percent: u32) -> ChatMessage {
    ChatMessage::new(
        format!("Your BMW is low on fuel: only {fuel_percent}% left in the tank."),
        ChatIcon::Warning,
    )
}
