//! Tri-state answers, semesters, and status enums.
//!
//! Backend records carry several "Yes"/"No"/unset answers as free strings.
//! They are modelled here as explicit enums so that an empty string, a
//! `null`, and a missing key all collapse to the same `Unspecified` value.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TriState
// ---------------------------------------------------------------------------

/// An affirmative / negative / unspecified answer.
///
/// Serialized as `"Yes"`, `"No"`, or `""`. Deserialization also accepts
/// `null`, booleans, and any casing of yes/no.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum TriState {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl TriState {
    /// Interpret a free-form label. Anything other than yes/no is unspecified.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("yes") {
            Self::Yes
        } else if trimmed.eq_ignore_ascii_case("no") {
            Self::No
        } else {
            Self::Unspecified
        }
    }

    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unspecified => "",
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => f.write_str("unspecified"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl FromStr for TriState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Self::Yes),
            "no" | "n" | "false" => Ok(Self::No),
            "" | "unset" | "unspecified" | "none" => Ok(Self::Unspecified),
            other => Err(CoreError::Validation(format!(
                "expected yes, no, or unset; got '{other}'"
            ))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTriState {
    Flag(bool),
    Text(String),
}

impl<'de> Deserialize<'de> for TriState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawTriState>::deserialize(deserializer)? {
            None => Self::Unspecified,
            Some(RawTriState::Flag(true)) => Self::Yes,
            Some(RawTriState::Flag(false)) => Self::No,
            Some(RawTriState::Text(text)) => Self::from_label(&text),
        })
    }
}

// ---------------------------------------------------------------------------
// HiringSemester
// ---------------------------------------------------------------------------

/// Semester in which a professor is hiring.
///
/// `Both` satisfies a search for either specific semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum HiringSemester {
    Fall,
    Spring,
    Both,
}

impl HiringSemester {
    /// Case-insensitive label lookup; unknown labels yield `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        [Self::Fall, Self::Spring, Self::Both]
            .into_iter()
            .find(|semester| semester.as_str().eq_ignore_ascii_case(trimmed))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for HiringSemester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HiringSemester {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            CoreError::Validation(format!("expected Fall, Spring, or Both; got '{s}'"))
        })
    }
}

// ---------------------------------------------------------------------------
// UniversityStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a university entry.
///
/// Entries inferred from professor data (never persisted) are `Pending`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum UniversityStatus {
    #[default]
    Active,
    Pending,
}

impl UniversityStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for UniversityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserStatus
// ---------------------------------------------------------------------------

/// Account approval state managed by administrators.
///
/// ```text
/// PENDING → ACTIVE ⇄ HOLD
///         → REMOVED
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Pending,
    Active,
    Hold,
    Removed,
}

impl UserStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Active, Self::Hold, Self::Removed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Hold => "HOLD",
            Self::Removed => "REMOVED",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "expected one of pending, active, hold, removed; got '{s}'"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role granted by the backend at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Visitor,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Visitor => "visitor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "visitor" => Ok(Self::Visitor),
            other => Err(CoreError::Validation(format!("unknown role '{other}'"))),
        }
    }
}
