//! Date parsing and formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Default render pattern (ISO calendar date)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Input accepted by [`parse_date`]: an already-typed timestamp or an
/// ISO-8601 string
#[derive(Debug, Clone)]
pub enum DateValue {
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl From<DateTime<Utc>> for DateValue {
    fn from(value: DateTime<Utc>) -> Self {
        DateValue::Timestamp(value)
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        DateValue::Text(value.to_string())
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        DateValue::Text(value)
    }
}

/// Parse a date input.
///
/// Strings go through ISO-8601 rules (RFC 3339, offset-less datetime, or
/// bare calendar date); an already-typed timestamp is returned unchanged.
/// Blank or unparseable input yields `None`, never an error.
pub fn parse_date(value: impl Into<DateValue>) -> Option<DateTime<Utc>> {
    match value.into() {
        DateValue::Timestamp(ts) => Some(ts),
        DateValue::Text(text) => parse_iso(&text),
    }
}

/// Parse a date input and render it with a chrono strftime pattern.
/// `None` pattern means [`DEFAULT_DATE_FORMAT`]; a failed parse yields
/// `None`.
pub fn format_date(value: impl Into<DateValue>, pattern: Option<&str>) -> Option<String> {
    let date = parse_date(value)?;
    Some(date.format(pattern.unwrap_or(DEFAULT_DATE_FORMAT)).to_string())
}

fn parse_iso(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&dt));
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}
