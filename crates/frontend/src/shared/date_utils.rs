/// Utilities for parsing and formatting the dates shown in the payments table
///
/// Payment timestamps arrive as `MM-dd-yyyy hh:mm AM/PM`; filters and the date
/// picker work in canonical `YYYY-MM-DD`.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// chrono format of a stored payment timestamp, e.g. "03-15-2024 10:30 AM"
pub const PAYMENT_TIMESTAMP_FORMAT: &str = "%m-%d-%Y %I:%M %p";

/// Canonical calendar date format used by filters
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the date picker label, e.g. "03-15-2024"
pub const PICKER_DATE_FORMAT: &str = "%m-%d-%Y";

const DATE_TIME_FORMATS: &[&str] = &[
    PAYMENT_TIMESTAMP_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[CANONICAL_DATE_FORMAT, "%m/%d/%Y", "%m-%d-%Y"];

/// True when `value` has exactly the `dd-dd-dddd dd:dd AM|PM` shape
///
/// Only the shape is checked here; `parse_payment_timestamp` validates ranges.
pub fn matches_payment_timestamp(value: &str) -> bool {
    const SHAPE: &[u8] = b"00-00-0000 00:00 _M";
    let bytes = value.as_bytes();
    bytes.len() == SHAPE.len()
        && bytes.iter().zip(SHAPE).all(|(&b, &s)| match s {
            b'0' => b.is_ascii_digit(),
            b'_' => b == b'A' || b == b'P',
            _ => b == s,
        })
}

/// Parses a stored payment timestamp; anything off-pattern is `None`
pub fn parse_payment_timestamp(value: &str) -> Option<NaiveDateTime> {
    if !matches_payment_timestamp(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, PAYMENT_TIMESTAMP_FORMAT).ok()
}

/// Parses a canonical `YYYY-MM-DD` filter value
pub fn parse_canonical_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CANONICAL_DATE_FORMAT).ok()
}

/// Best-effort parse of any date-like string the page deals with
///
/// Date-only inputs resolve to midnight.
pub fn parse_date_like(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Normalizes a date-like string to `YYYY-MM-DD`
/// Example: "03-15-2024 10:30 AM" -> "2024-03-15"
pub fn normalize_date(value: &str) -> Option<String> {
    parse_date_like(value).map(|dt| dt.date().format(CANONICAL_DATE_FORMAT).to_string())
}

/// Formats a calendar date as `YYYY-MM-DD`
pub fn format_canonical_date(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Formats a calendar date for the date picker label (`MM-dd-yyyy`)
pub fn format_picker_date(date: NaiveDate) -> String {
    date.format(PICKER_DATE_FORMAT).to_string()
}
