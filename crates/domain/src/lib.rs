//! # chargebot-domain
//!
//! Pure domain model for the chargebot vehicle notifier.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps and durations
//! - Define the **vehicle snapshot** (charge, lock, doors, fuel, position)
//! - Define the **account** vocabulary (API regions, credentials)
//! - Define **notification settings** (bad statuses, thresholds, feature flags)
//! - Define outbound **actions** (chat message, automation event, door lock)
//! - Turn a snapshot into human-readable fields and decide which rules fire
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod account;
pub mod notification;
pub mod report;
pub mod rules;
pub mod settings;
pub mod vehicle;
