use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{TriState, UniversityStatus};
use crate::errors::CoreError;
use crate::ids::RecordId;
use crate::serde_util;

/// A university known either from the backend table or only by name from
/// professor records.
///
/// `id == None` marks an inferred placeholder; saving one creates a new
/// persisted record rather than updating anything.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct University {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub cs_faculty_website_url: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub main_website_url: Option<String>,
    #[serde(default, deserialize_with = "serde_util::lenient_i64")]
    pub ranking: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub state: Option<String>,
    #[serde(default)]
    pub gre_required: TriState,
    #[serde(default, deserialize_with = "serde_util::lenient_datetime")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub comments: Option<String>,
    #[serde(default)]
    pub status: UniversityStatus,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub from_professors: bool,
}

impl University {
    /// Placeholder for a name seen only in professor records.
    #[must_use]
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            cs_faculty_website_url: None,
            main_website_url: None,
            ranking: None,
            state: None,
            gre_required: TriState::Unspecified,
            deadline: None,
            notes: None,
            comments: None,
            status: UniversityStatus::Pending,
            from_professors: true,
        }
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// `notes` and `comments` name the same concept; `notes` wins.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().or(self.comments.as_deref())
    }

    /// Dedupe key used by the roster merge.
    #[must_use]
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Body for create/update calls.
    #[must_use]
    pub fn to_input(&self) -> UniversityInput {
        UniversityInput {
            name: self.name.clone(),
            cs_faculty_website_url: self.cs_faculty_website_url.clone(),
            main_website_url: self.main_website_url.clone(),
            ranking: self.ranking,
            state: self.state.clone(),
            gre_required: self.gre_required,
            deadline: self.deadline,
            notes: self.notes().map(str::to_string),
        }
    }
}

/// Payload for `POST /university` and `PUT /university/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UniversityInput {
    pub name: String,
    pub cs_faculty_website_url: Option<String>,
    pub main_website_url: Option<String>,
    pub ranking: Option<i64>,
    pub state: Option<String>,
    pub gre_required: TriState,
    pub deadline: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl UniversityInput {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the name is blank.
    pub fn validated(self) -> Result<Self, CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("university name is required".into()));
        }
        Ok(self)
    }
}
