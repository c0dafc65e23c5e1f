//! # chargebot-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RegionResolver` — country name to API region
//!   - `AccountConnector` / `VehicleAccount` — login, vehicles, state, remote lock
//!   - `ChatNotifier` — post a chat message
//!   - `AutomationTrigger` — fire a named automation event
//! - Define **driving/inbound** use-cases:
//!   - `NotificationEngine` — evaluate one vehicle, log, dispatch actions
//!   - `PollService` — one complete evaluate-and-notify pass over the account
//! - Separate fatal failures (abort the pass) from recoverable ones (logged)
//!
//! ## Dependency rule
//! Depends on `chargebot-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod error;
pub mod notification_engine;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
