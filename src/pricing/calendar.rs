//! Calendar helpers for rental periods.
//!
//! Booking timestamps are kept as local wall-clock values. A pickup at
//! Saturday 01:00 +07:00 is a Saturday pickup even though it is Friday in UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

use super::errors::{ValidationError, ValidationReason};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a booking timestamp into its local wall-clock value.
///
/// Accepts RFC 3339 (the offset's local time is kept, not converted to UTC),
/// `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]` and bare `YYYY-MM-DD`,
/// which is read as midnight.
pub fn parse_local_instant(
    raw: &str,
    field: &'static str,
) -> Result<NaiveDateTime, ValidationError> {
    let raw = raw.trim();
    let malformed = || ValidationError::new(field, ValidationReason::Malformed);

    if raw.is_empty() {
        return Err(ValidationError::new(field, ValidationReason::Missing));
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Ok(zoned.naive_local());
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(local);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(malformed)
}

/// Saturday or Sunday on the local calendar.
pub fn is_weekend(at: NaiveDateTime) -> bool {
    matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of billable days between pickup and return.
///
/// Any started day counts as a full day. The return must be strictly after
/// the pickup.
pub fn rental_days(
    pickup: NaiveDateTime,
    return_at: NaiveDateTime,
) -> Result<i64, ValidationError> {
    let seconds = (return_at - pickup).num_seconds();
    if seconds <= 0 {
        return Err(ValidationError::new("return_at", ValidationReason::NotAfterPickup));
    }

    Ok((seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY)
}
