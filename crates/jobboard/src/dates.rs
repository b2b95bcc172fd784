//! Timestamp and calendar-day handling shared by storage and payloads.
//!
//! Stored timestamps are RFC 3339 UTC with millisecond precision, so
//! lexical order in SQL equals chronological order.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{JobboardError, Result};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Formats a timestamp the way it is persisted.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Formats a calendar day as `YYYY-MM-DD`.
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Parses any timestamp shape this application has ever written or accepted.
///
/// Offsets are converted to UTC. Values without an offset are read as UTC,
/// and a bare date means midnight UTC.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, DAY_FORMAT)
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Reads a timestamp column. Unreadable values are logged and replaced
/// with the current time.
pub fn parse_stored_timestamp(input: &str, job_id: i64) -> DateTime<Utc> {
    parse_timestamp(input).unwrap_or_else(|| {
        log::warn!(
            "Unreadable timestamp '{}' on job {}, using current time",
            input,
            job_id
        );
        Utc::now()
    })
}

/// Parses a caller-supplied delivery date.
pub fn parse_delivery_date(input: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(input)
        .ok_or_else(|| JobboardError::validation(format!("Invalid delivery date: {}", input)))
}

/// Parses a calendar-day filter. Accepts `YYYY-MM-DD` or a full timestamp,
/// which is reduced to its UTC date.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(day) = NaiveDate::parse_from_str(input, DAY_FORMAT) {
        return Ok(day);
    }
    parse_timestamp(input)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| JobboardError::validation(format!("Invalid date: {}", input)))
}
