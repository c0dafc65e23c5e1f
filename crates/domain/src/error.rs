//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ChargebotError`] via `#[from]` (domain) or `From` impls (adapters).

/// Base error for everything that crosses a port boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChargebotError {
    /// An enumerated value coming from the vehicle API has no mapping.
    #[error("unmapped status")]
    UnmappedStatus(#[from] UnmappedStatus),

    /// The snapshot violates a contract the rules rely on.
    #[error("invalid vehicle snapshot")]
    InvalidSnapshot(#[from] SnapshotError),

    /// The configured country does not belong to any API region.
    #[error("unknown country")]
    UnknownCountry(#[from] UnknownCountryError),

    /// The vehicle account rejected the credentials.
    #[error("authentication failed")]
    Authentication(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An outbound call (HTTP, remote service) failed.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A raw enumerated value that the domain does not know how to represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unmapped {kind} value {value:?}")]
pub struct UnmappedStatus {
    /// Which enumeration the value was meant for, e.g. `"charging status"`.
    pub kind: &'static str,
    /// The offending raw value.
    pub value: String,
}

/// Violations of the snapshot contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// A ratio was requested against a zero denominator.
    #[error("division by zero while computing {metric}")]
    DivisionByZero {
        /// Name of the derived metric.
        metric: &'static str,
    },
}

/// A country name that no API region claims.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no API region for country {0:?}")]
pub struct UnknownCountryError(pub String);
