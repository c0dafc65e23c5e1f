//! Slack adapter error types.

use chargebot_domain::error::ChargebotError;

/// Errors specific to the Slack adapter.
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    /// The webhook URL could not be parsed.
    #[error("invalid webhook URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client failed to build or the request failed to complete.
    #[error("webhook request failed")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("webhook answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl From<SlackError> for ChargebotError {
    fn from(err: SlackError) -> Self {
        Self::Transport(Box::new(err))
    }
}
