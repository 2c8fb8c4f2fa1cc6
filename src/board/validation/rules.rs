//! Individual validation rules.
//!
//! Each rule is a pure function returning `Ok(())` on success or the
//! specific [`ValidationError`] on failure.

use crate::board::domain::{ValidatableValue, ValidationError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-time layouts accepted in addition to RFC 3339.
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Checks that the stringified value is non-empty after trimming.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] for blank values.
pub fn check_required(value: &ValidatableValue) -> Result<(), ValidationError> {
    if value.to_string().trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Checks that `text` has at least `min` characters.
///
/// # Errors
///
/// Returns [`ValidationError::TooShort`] when the text is shorter.
pub fn check_min_length(text: &str, min: usize) -> Result<(), ValidationError> {
    let actual = text.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { min, actual });
    }
    Ok(())
}

/// Checks that `text` has at most `max` characters.
///
/// # Errors
///
/// Returns [`ValidationError::TooLong`] when the text is longer.
pub fn check_max_length(text: &str, max: usize) -> Result<(), ValidationError> {
    let actual = text.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}

/// Checks that `text` is a date no earlier than `now`.
///
/// The result depends on `now`, so a deadline that passes today fails once
/// the deadline has gone by.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when the text does not parse
/// and [`ValidationError::DateInPast`] when it lies before `now`.
pub fn check_future_date(text: &str, now: DateTime<Utc>) -> Result<(), ValidationError> {
    let date = parse_date(text).ok_or_else(|| ValidationError::InvalidDate(text.to_owned()))?;
    if date < now {
        return Err(ValidationError::DateInPast(text.to_owned()));
    }
    Ok(())
}

/// Parses a user-entered date.
///
/// Accepts RFC 3339 timestamps, bare `YYYY-MM-DD` dates (midnight UTC) and
/// `YYYY-MM-DDTHH:MM[:SS]` without an offset (UTC).
#[must_use]
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
}
