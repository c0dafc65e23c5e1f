//! Time and duration helpers.

use chrono::{DateTime, TimeDelta, Utc};

/// UTC timestamp used for the vehicle's last update.
pub type Timestamp = DateTime<Utc>;

/// Render a duration as `H:MM:SS` (hours are not zero-padded).
///
/// Negative durations are clamped to zero.
#[must_use]
pub fn format_hms(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
