//! Notification engine — evaluates one vehicle and dispatches the outcome.
//!
//! For a vehicle the engine refreshes its snapshot, logs its raw fields,
//! runs the domain rules, logs the derived status, then executes every
//! action in rule order. Each
//! action is its own failure boundary: an error is logged as a warning,
//! recorded in the [`DispatchReport`], and the next action still runs.

use chargebot_domain::error::ChargebotError;
use chargebot_domain::notification::Action;
use chargebot_domain::report::StatusReport;
use chargebot_domain::rules::evaluate;
use chargebot_domain::settings::NotificationSettings;
use chargebot_domain::vehicle::{Vehicle, VehicleSnapshot};

use crate::error::{RecoverableError, error_chain};
use crate::ports::{AutomationTrigger, ChatNotifier, VehicleAccount};

/// What happened to the actions of one vehicle.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Actions that completed.
    pub sent: Vec<Action>,
    /// Actions that failed, in attempt order.
    pub failures: Vec<RecoverableError>,
}

/// Evaluates vehicles and sends their notifications.
pub struct NotificationEngine<C, T> {
    chat: C,
    trigger: T,
    settings: NotificationSettings,
}

impl<C, T> NotificationEngine<C, T>
where
    C: ChatNotifier,
    T: AutomationTrigger,
{
    /// Create a new engine.
    pub fn new(chat: C, trigger: T, settings: NotificationSettings) -> Self {
        Self {
            chat,
            trigger,
            settings,
        }
    }

    /// Refresh, evaluate, log and dispatch for one vehicle.
    ///
    /// # Errors
    ///
    /// Returns the error of the snapshot refresh, or
    /// [`ChargebotError::InvalidSnapshot`] when the snapshot cannot be
    /// evaluated. Dispatch failures are never returned; they end up in the
    /// [`DispatchReport`].
    pub async fn process<A>(
        &self,
        account: &A,
        vehicle: &Vehicle,
    ) -> Result<DispatchReport, ChargebotError>
    where
        A: VehicleAccount,
    {
        let snapshot = account.refresh_state(vehicle).await?;
        log_snapshot(vehicle, &snapshot);
        let evaluation = evaluate(&snapshot, &self.settings)?;
        log_report(vehicle, &evaluation.report);
        Ok(self.dispatch(account, vehicle, &evaluation.actions).await)
    }

    /// Execute actions in order, isolating failures.
    pub async fn dispatch<A>(
        &self,
        account: &A,
        vehicle: &Vehicle,
        actions: &[Action],
    ) -> DispatchReport
    where
        A: VehicleAccount,
    {
        let mut report = DispatchReport::default();
        for action in actions {
            match self.execute(account, vehicle, action).await {
                Ok(()) => report.sent.push(action.clone()),
                Err(err) => {
                    tracing::warn!(
                        vin = %vehicle.vin,
                        %action,
                        error = %err,
                        cause = %error_chain(&err),
                        "action failed"
                    );
                    report.failures.push(err);
                }
            }
        }
        report
    }

    async fn execute<A>(
        &self,
        account: &A,
        vehicle: &Vehicle,
        action: &Action,
    ) -> Result<(), RecoverableError>
    where
        A: VehicleAccount,
    {
        match action {
            Action::Trigger(event) => {
                tracing::warn!(vin = %vehicle.vin, "battery is not charging for some reason");
                self.trigger
                    .fire(event)
                    .await
                    .map_err(RecoverableError::Trigger)
            }
            Action::Chat(message) => self
                .chat
                .send(message)
                .await
                .map_err(RecoverableError::Chat),
            Action::LockDoors => {
                tracing::info!(vin = %vehicle.vin, "doors not locked, locking remotely");
                account
                    .lock_doors(vehicle)
                    .await
                    .map_err(RecoverableError::Lock)
            }
        }
    }
}

/// Raw fields, logged before evaluation so they survive a rejected snapshot.
fn log_snapshot(vehicle: &Vehicle, snapshot: &VehicleSnapshot) {
    tracing::info!(
        vin = %vehicle.vin,
        vehicle = %vehicle,
        last_update = %snapshot.timestamp,
        last_reason = %snapshot.update_reason,
        position = %snapshot.position,
        charging_status = %snapshot.charging_status,
        battery_percent = snapshot.battery_percent,
        lock_state = %snapshot.lock_state,
        doors = %snapshot.doors,
        open_doors = ?snapshot.doors.open(),
        remaining_fuel = snapshot.remaining_fuel,
        max_fuel = snapshot.max_fuel,
        "vehicle snapshot"
    );
}

fn log_report(vehicle: &Vehicle, report: &StatusReport) {
    tracing::info!(
        vin = %vehicle.vin,
        status = report.status_phrase,
        time_remaining = %report.time_remaining,
        battery_percent = report.battery_percent,
        fuel_percent = report.fuel_percent,
        range = %report.range,
        "vehicle status"
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chargebot_domain::error::SnapshotError;
    use chargebot_domain::notification::{ChatIcon, ChatMessage};
    use chargebot_domain::rules::UNLOCKED_MESSAGE;
    use chargebot_domain::settings::FeatureFlags;
    use chargebot_domain::vehicle::{ChargingStatus, DoorPosition, LockState};

    use super::*;
    use crate::testing::{
        FakeAccount, LogCapture, SpyChat, SpyTrigger, settings_with, snapshot, vehicle,
    };

    fn engine(
        chat: &Arc<SpyChat>,
        trigger: &Arc<SpyTrigger>,
        features: FeatureFlags,
    ) -> NotificationEngine<Arc<SpyChat>, Arc<SpyTrigger>> {
        NotificationEngine::new(chat.clone(), trigger.clone(), settings_with(features))
    }

    #[tokio::test]
    async fn should_post_summary_for_healthy_vehicle() {
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::default());
        let account = FakeAccount::with(snapshot());

        let report = engine(&chat, &trigger, FeatureFlags::all())
            .process(&account, &vehicle())
            .await
            .unwrap();

        assert_eq!(report.sent.len(), 1);
        assert!(report.failures.is_empty());
        let sent = chat.attempts();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text.starts_with("Your BMW is charging."));
        assert!(trigger.fired().is_empty());
        assert!(account.locks().is_empty());
    }

    #[tokio::test]
    async fn should_fire_single_trigger_for_error_status() {
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::default());
        let mut snap = snapshot();
        snap.charging_status = ChargingStatus::Error;
        let account = FakeAccount::with(snap);

        let mut features = FeatureFlags::none();
        features.trigger_on_bad_charge = true;
        engine(&chat, &trigger, features)
            .process(&account, &vehicle())
            .await
            .unwrap();

        let fired = trigger.fired();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].value1, "not charging due to an error");
        assert!(chat.attempts().is_empty());
    }

    #[tokio::test]
    async fn should_keep_going_when_summary_chat_fails() {
        let chat = Arc::new(SpyChat::failing_first(1));
        let trigger = Arc::new(SpyTrigger::default());
        let mut snap = snapshot();
        snap.lock_state = LockState::Unlocked;
        snap.remaining_fuel = 1;
        let account = FakeAccount::with(snap);

        let report = engine(&chat, &trigger, FeatureFlags::all())
            .process(&account, &vehicle())
            .await
            .unwrap();

        let attempts = chat.attempts();
        assert_eq!(attempts.len(), 3);
        assert!(attempts[0].text.starts_with("Your BMW is charging."));
        assert_eq!(
            attempts[1],
            ChatMessage::new(UNLOCKED_MESSAGE, ChatIcon::Warning)
        );
        assert!(attempts[2].text.contains("low on fuel"));
        assert_eq!(account.locks(), vec![vehicle().vin]);

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], RecoverableError::Chat(_)));
        assert_eq!(report.sent.len(), 3);
    }

    #[tokio::test]
    async fn should_keep_going_when_trigger_fails() {
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::failing());
        let mut snap = snapshot();
        snap.charging_status = ChargingStatus::Error;
        let account = FakeAccount::with(snap);

        let report = engine(&chat, &trigger, FeatureFlags::all())
            .process(&account, &vehicle())
            .await
            .unwrap();

        assert!(matches!(
            report.failures.as_slice(),
            [RecoverableError::Trigger(_)]
        ));
        assert_eq!(chat.attempts().len(), 1);
    }

    #[tokio::test]
    async fn should_report_lock_failure_without_affecting_alerts() {
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::default());
        let mut snap = snapshot();
        snap.lock_state = LockState::Unlocked;
        snap.remaining_fuel = 0;
        let account = FakeAccount::with(snap).failing_lock();

        let report = engine(&chat, &trigger, FeatureFlags::all())
            .process(&account, &vehicle())
            .await
            .unwrap();

        assert!(matches!(
            report.failures.as_slice(),
            [RecoverableError::Lock(_)]
        ));
        assert_eq!(chat.attempts().len(), 3);
    }

    #[tokio::test]
    async fn should_propagate_refresh_failure() {
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::default());
        let account = FakeAccount::with(snapshot()).failing_refresh();

        let result = engine(&chat, &trigger, FeatureFlags::all())
            .process(&account, &vehicle())
            .await;

        assert!(matches!(result, Err(ChargebotError::Transport(_))));
        assert!(chat.attempts().is_empty());
    }

    #[tokio::test]
    async fn should_reject_snapshot_with_zero_tank_capacity() {
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::default());
        let mut snap = snapshot();
        snap.max_fuel = 0;
        let account = FakeAccount::with(snap);

        let result = engine(&chat, &trigger, FeatureFlags::all())
            .process(&account, &vehicle())
            .await;

        assert!(matches!(
            result,
            Err(ChargebotError::InvalidSnapshot(
                SnapshotError::DivisionByZero { .. }
            ))
        ));
        assert!(chat.attempts().is_empty());
    }

    #[tokio::test]
    async fn should_log_raw_fields_of_rejected_snapshot() {
        let logs = LogCapture::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::default());
        let mut snap = snapshot();
        snap.max_fuel = 0;
        snap.doors.trunk = DoorPosition::Open;

        let result = engine(&chat, &trigger, FeatureFlags::all())
            .process(&FakeAccount::with(snap), &vehicle())
            .await;

        assert!(result.is_err());
        let output = logs.contents();
        assert!(output.contains("vehicle snapshot"), "{output}");
        assert!(output.contains("charging_status=CHARGING"), "{output}");
        assert!(output.contains("max_fuel=0"), "{output}");
        assert!(output.contains("open_doors=[\"trunk\"]"), "{output}");
        assert!(!output.contains("vehicle status"), "{output}");
    }

    #[tokio::test]
    async fn should_log_derived_status_after_evaluation() {
        let logs = LogCapture::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::default());

        engine(&chat, &trigger, FeatureFlags::none())
            .process(&FakeAccount::with(snapshot()), &vehicle())
            .await
            .unwrap();

        let output = logs.contents();
        assert!(output.contains("vehicle snapshot"), "{output}");
        assert!(output.contains("vehicle status"), "{output}");
        assert!(output.contains("fuel_percent=88"), "{output}");
    }

    #[tokio::test]
    async fn should_dispatch_nothing_for_empty_action_list() {
        let chat = Arc::new(SpyChat::default());
        let trigger = Arc::new(SpyTrigger::default());
        let account = FakeAccount::with(snapshot());

        let report = engine(&chat, &trigger, FeatureFlags::all())
            .dispatch(&account, &vehicle(), &[])
            .await;

        assert!(report.sent.is_empty());
        assert!(report.failures.is_empty());
    }
}
