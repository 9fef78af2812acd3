use std::time::Duration;

use tracing::debug;

use crate::{Error, duration_error};

/// Parse a duration string of the form `<integer><unit>`, e.g. `10s` or `250ms`.
///
/// The value must be plain ASCII digits followed directly by an alphabetic unit
/// suffix. Units are whatever `humantime` understands (`ms`, `s`, `m`, `h`, `d`
/// and their long forms).
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] if the string is not in `<integer><unit>`
/// form or the unit is unknown.
pub fn parse_duration(value: &str) -> Result<Duration, Error> {
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);
    if amount.is_empty() || unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        debug!("Rejected duration string: {:?}", value);
        return Err(duration_error!("expected <integer><unit>, got {:?}", value));
    }
    humantime::parse_duration(value).map_err(|e| {
        debug!("Unknown duration unit in {:?}: {}", value, e);
        duration_error!("{:?}: {}", value, e)
    })
}
