//! IFTTT adapter error types.

use chargebot_domain::error::ChargebotError;

/// Errors specific to the IFTTT adapter.
#[derive(Debug, thiserror::Error)]
pub enum IftttError {
    /// The trigger URL could not be built.
    #[error("invalid trigger URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client failed to build or the request failed to complete.
    #[error("trigger request failed")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("trigger answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl From<IftttError> for ChargebotError {
    fn from(err: IftttError) -> Self {
        Self::Transport(Box::new(err))
    }
}
