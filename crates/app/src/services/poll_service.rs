//! Poll service — one evaluate-and-notify pass over the whole account.
//!
//! The pass is stateless: it resolves the region, logs in, and hands every
//! vehicle to the [`NotificationEngine`]. Scheduling repeated passes is left
//! to whatever invokes the binary.

use chargebot_domain::account::Credentials;
use chargebot_domain::notification::Action;

use crate::error::{FatalError, RecoverableError};
use crate::notification_engine::{DispatchReport, NotificationEngine};
use crate::ports::{
    AccountConnector, AutomationTrigger, ChatNotifier, RegionResolver, VehicleAccount,
};

/// Totals of one pass.
#[derive(Debug, Default)]
pub struct PassSummary {
    /// Number of vehicles evaluated.
    pub vehicles: usize,
    /// Actions that completed, across all vehicles.
    pub sent: Vec<Action>,
    /// Recoverable failures, across all vehicles.
    pub failures: Vec<RecoverableError>,
}

impl PassSummary {
    fn absorb(&mut self, report: DispatchReport) {
        self.vehicles += 1;
        self.sent.extend(report.sent);
        self.failures.extend(report.failures);
    }
}

/// Runs a complete pass.
pub struct PollService<R, A, C, T> {
    resolver: R,
    connector: A,
    engine: NotificationEngine<C, T>,
    country: String,
    credentials: Credentials,
}

impl<R, A, C, T> PollService<R, A, C, T>
where
    R: RegionResolver,
    A: AccountConnector,
    C: ChatNotifier,
    T: AutomationTrigger,
{
    /// Create a new service for the given account.
    pub fn new(
        resolver: R,
        connector: A,
        engine: NotificationEngine<C, T>,
        country: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            resolver,
            connector,
            engine,
            country: country.into(),
            credentials,
        }
    }

    /// Run one pass.
    ///
    /// # Errors
    ///
    /// Returns a [`FatalError`] when the region cannot be resolved, the
    /// account refuses the login, or a vehicle cannot be listed, refreshed
    /// or evaluated. Notification failures do not abort the pass.
    pub async fn run_once(&self) -> Result<PassSummary, FatalError> {
        let region = self
            .resolver
            .resolve(&self.country)
            .map_err(|source| FatalError::Region {
                country: self.country.clone(),
                source,
            })?;
        tracing::debug!(country = %self.country, %region, "resolved API region");

        let account = self
            .connector
            .connect(&self.credentials, region)
            .await
            .map_err(FatalError::Connect)?;
        tracing::debug!(username = %self.credentials.username, "connected to vehicle account");

        let vehicles = account.vehicles().await.map_err(FatalError::VehicleState)?;
        tracing::debug!(count = vehicles.len(), "vehicles found");

        let mut summary = PassSummary::default();
        for vehicle in &vehicles {
            let report = self
                .engine
                .process(&account, vehicle)
                .await
                .map_err(FatalError::VehicleState)?;
            summary.absorb(report);
        }

        tracing::info!(
            vehicles = summary.vehicles,
            sent = summary.sent.len(),
            failed = summary.failures.len(),
            "pass complete"
        );
        Ok(summary)
    }
}
