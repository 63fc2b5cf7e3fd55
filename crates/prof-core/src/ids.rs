//! Opaque record identifiers.
//!
//! The backend emits numeric ids for most tables but nothing in the client
//! depends on that, so ids are kept as either form and compared by their
//! string rendering.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Parse user input: all-digit strings become numeric ids.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Int)
    }

    /// Compare against an id typed by a user or read from a URL parameter.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        self.to_string() == raw.trim()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_deserialize() {
        let a: RecordId = serde_json::from_str("42").unwrap();
        let b: RecordId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(a, RecordId::Int(42));
        assert_eq!(b, RecordId::Text("abc-1".into()));
    }

    #[test]
    fn matches_compares_string_forms() {
        assert!(RecordId::Int(7).matches("7"));
        assert!(RecordId::Int(7).matches(" 7 "));
        assert!(RecordId::Text("7".into()).matches("7"));
        assert!(!RecordId::Int(7).matches("70"));
    }

    #[test]
    fn parse_prefers_numeric() {
        assert_eq!(RecordId::parse("12"), RecordId::Int(12));
        assert_eq!(RecordId::parse("p-12"), RecordId::Text("p-12".into()));
    }
}
