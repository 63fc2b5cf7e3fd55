//! Lenient deserializers for backend payloads.
//!
//! Form-backed fields arrive as `""`, `null`, or absent interchangeably.
//! These adapters normalize all three to `None`/`false` so entity code never
//! has to distinguish them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::enums::HiringSemester;
use crate::errors::CoreError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp in any of the shapes the backend or a form produces.
///
/// Accepts RFC 3339, `datetime-local` style `YYYY-MM-DDTHH:MM[:SS]` (read as
/// UTC), and bare `YYYY-MM-DD` (midnight UTC).
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] when no format matches.
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, CoreError> {
    let value = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::InvalidDate {
            value: raw.to_string(),
        })
}

/// `null`, missing, and whitespace-only strings become `None`.
pub fn blank_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// `null` and missing become `false`.
pub fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Optional timestamp; blank strings become `None`.
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match blank_string(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_datetime(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Optional semester; blank or unrecognised labels become `None`.
pub fn lenient_semester<'de, D>(deserializer: D) -> Result<Option<HiringSemester>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(blank_string(deserializer)?.and_then(|raw| HiringSemester::from_label(&raw)))
}

/// Optional integer that may arrive as a number, a numeric string, or blank.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(value)) => Ok(Some(value)),
        #[allow(clippy::cast_possible_truncation)]
        Some(Raw::Float(value)) => Ok(Some(value as i64)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339() {
        let parsed = parse_datetime("2025-03-04T10:20:30Z").unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.day(), 4);
    }

    #[test]
    fn parses_datetime_local_input() {
        let parsed = parse_datetime("2025-03-04T10:20").unwrap();
        assert_eq!(parsed.minute(), 20);
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let parsed = parse_datetime("2025-12-01").unwrap();
        assert_eq!(parsed.month(), 12);
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_datetime("next tuesday").unwrap_err();
        assert!(err.to_string().contains("next tuesday"));
    }
}
