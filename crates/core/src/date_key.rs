//! Calendar date keys (`YYYY-MM-DD`) anchored to the canonical puzzle zone.
//!
//! "Today" must roll over at the same instant for every player regardless of
//! their local clock, so keys are always rendered in one configured zone.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::CoreError;

/// Default canonical puzzle time zone.
pub const DEFAULT_PUZZLE_TIMEZONE: &str = "Europe/Paris";

/// `chrono` format string for date keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Render `instant` as a `YYYY-MM-DD` key in `tz`.
pub fn date_key(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(DATE_KEY_FORMAT).to_string()
}

/// Parse an IANA zone name such as `Europe/Paris`.
pub fn parse_timezone(name: &str) -> Result<Tz, CoreError> {
    name.parse::<Tz>()
        .map_err(|e| CoreError::Configuration(format!("Invalid puzzle time zone '{name}': {e}")))
}

/// Parse a strict, zero-padded `YYYY-MM-DD` key.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, CoreError> {
    if key.len() != 10 {
        return Err(CoreError::Validation(format!(
            "Date must be formatted as YYYY-MM-DD, got '{key}'"
        )));
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).map_err(|_| {
        CoreError::Validation(format!("Date must be formatted as YYYY-MM-DD, got '{key}'"))
    })
}

/// Key of the day before `key`.
pub fn previous_date_key(key: &str) -> Result<String, CoreError> {
    let date = parse_date_key(key)?;
    let previous = date
        .pred_opt()
        .ok_or_else(|| CoreError::Validation(format!("No day precedes '{key}'")))?;
    Ok(previous.format(DATE_KEY_FORMAT).to_string())
}
