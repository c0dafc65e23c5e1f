//! # chargebot — vehicle charging notifier
//!
//! Composition root: runs one poll-and-notify pass and exits.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the vehicle-account, chat and automation adapters
//! - Run one [`PollService`] pass
//! - Exit `0` when the pass completed (even if some notifications failed),
//!   `1` when it was aborted
//!
//! Repeating the pass is left to an external scheduler (cron, systemd timer).
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::process::ExitCode;

use chargebot_adapter_connected_drive::{
    ConnectedDriveConnector, ConnectedDriveError, CountryRegionResolver,
};
use chargebot_adapter_ifttt::{IftttError, IftttTrigger};
use chargebot_adapter_slack::{SlackError, SlackNotifier};
use chargebot_app::error::{FatalError, error_chain};
use chargebot_app::notification_engine::NotificationEngine;
use chargebot_app::services::poll_service::{PassSummary, PollService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError, LoggingConfig};

/// Why the pass did not complete.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("configuration error")]
    Config(#[from] ConfigError),
    #[error("failed to set up vehicle account client")]
    ConnectedDrive(#[from] ConnectedDriveError),
    #[error("failed to set up chat notifier")]
    Slack(#[from] SlackError),
    #[error("failed to set up automation trigger")]
    Ifttt(#[from] IftttError),
    #[error(transparent)]
    Pass(#[from] FatalError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::load();
    let filter = config.as_ref().map_or_else(
        |_| LoggingConfig::default().filter,
        |config| config.logging.filter.clone(),
    );
    init_tracing(&filter);

    match run(config).await {
        Ok(summary) => {
            tracing::debug!(
                vehicles = summary.vehicles,
                failed = summary.failures.len(),
                "exiting"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, cause = %error_chain(&err), "pass aborted");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(config: Result<Config, ConfigError>) -> Result<PassSummary, RunError> {
    let config = config?;
    config.trace();

    let connector = ConnectedDriveConnector::new(config.connected_drive.clone())?;
    let chat = if config.chat_enabled() {
        Some(SlackNotifier::new(config.slack.clone())?)
    } else {
        None
    };
    let trigger = if config.trigger_enabled() {
        Some(IftttTrigger::new(&config.ifttt)?)
    } else {
        None
    };

    let engine = NotificationEngine::new(chat, trigger, config.notifications.clone());
    let service = PollService::new(
        CountryRegionResolver,
        connector,
        engine,
        config.account.country.clone(),
        config.account.credentials(),
    );

    Ok(service.run_once().await?)
}
