//! Failure classes of a notification pass.
//!
//! A [`FatalError`] aborts the whole pass: without a snapshot there is
//! nothing to evaluate. A [`RecoverableError`] is logged and the pass goes on
//! with the next action.

use chargebot_domain::error::ChargebotError;

/// The pass could not obtain vehicle state.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// The configured country maps to no API region.
    #[error("failed to get API region for country {country:?}")]
    Region {
        country: String,
        #[source]
        source: ChargebotError,
    },

    /// Logging into the vehicle account failed.
    #[error("failed to connect to the vehicle account")]
    Connect(#[source] ChargebotError),

    /// Listing, refreshing or evaluating vehicles failed.
    #[error("failed to iterate over vehicle state")]
    VehicleState(#[source] ChargebotError),
}

/// One outbound call failed; the others are still attempted.
#[derive(Debug, thiserror::Error)]
pub enum RecoverableError {
    #[error("failed to post chat message")]
    Chat(#[source] ChargebotError),

    #[error("failed to fire automation event")]
    Trigger(#[source] ChargebotError),

    #[error("failed to issue remote door lock")]
    Lock(#[source] ChargebotError),
}

/// Flatten the sources of `err` (not `err` itself) into `a: b: c`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = String::new();
    let mut source = err.source();
    while let Some(cause) = source {
        if !out.is_empty() {
            out.push_str(": ");
        }
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
