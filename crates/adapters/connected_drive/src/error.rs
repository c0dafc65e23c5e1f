//! ConnectedDrive adapter error types.

use chargebot_domain::error::{ChargebotError, UnmappedStatus};

/// Errors specific to the ConnectedDrive adapter.
#[derive(Debug, thiserror::Error)]
pub enum ConnectedDriveError {
    /// An endpoint URL could not be built.
    #[error("invalid API URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client failed to build, the request failed, or the body
    /// could not be decoded.
    #[error("API request failed")]
    Http(#[from] reqwest::Error),

    /// The token endpoint refused the credentials.
    #[error("login refused with {status}")]
    LoginRefused { status: reqwest::StatusCode },

    /// An endpoint answered with a non-success status.
    #[error("{endpoint} answered {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The status carries an unparseable update time.
    #[error("invalid update time {0:?}")]
    InvalidTimestamp(String),

    /// The status reports no tank size and none is configured.
    #[error("status has no maxFuel and no tank_capacity is configured")]
    MissingTankCapacity,

    /// An enumerated status value has no domain mapping.
    #[error("unmapped vehicle status")]
    Unmapped(#[from] UnmappedStatus),
}

impl From<ConnectedDriveError> for ChargebotError {
    fn from(err: ConnectedDriveError) -> Self {
        match err {
            ConnectedDriveError::Unmapped(inner) => Self::UnmappedStatus(inner),
            refused @ ConnectedDriveError::LoginRefused { .. } => {
                Self::Authentication(Box::new(refused))
            }
            other => Self::Transport(Box::new(other)),
        }
    }
}
