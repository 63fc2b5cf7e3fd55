use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{HiringSemester, TriState};
use crate::errors::CoreError;
use crate::ids::RecordId;
use crate::serde_util;

/// A faculty member extracted by the backend pipeline or added by hand.
///
/// Invariants kept by the mutation helpers below:
/// - `mailed == false` implies `mailing_date == None`
/// - `follow_up_mail_sent == false` implies `follow_up_mail_date == None`
/// - `recruiting_phd_students == Yes` implies `currently_recruiting == Yes`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: RecordId,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub university_name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub research_interests: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub portfolio_website: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub lab_website: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub google_scholar_url: Option<String>,

    #[serde(default)]
    pub recruiting_phd_students: TriState,
    #[serde(default)]
    pub currently_recruiting: TriState,
    #[serde(default, deserialize_with = "serde_util::lenient_semester")]
    pub hiring_semester: Option<HiringSemester>,

    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub mailed: bool,
    #[serde(default, deserialize_with = "serde_util::lenient_datetime")]
    pub mailing_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub follow_up_mail_sent: bool,
    #[serde(default, deserialize_with = "serde_util::lenient_datetime")]
    pub follow_up_mail_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub priority: bool,
    #[serde(default, deserialize_with = "serde_util::lenient_datetime")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub gre_required: bool,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub comments: Option<String>,
}

impl Professor {
    /// Minimal record with every optional field unset.
    #[must_use]
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            email: None,
            university_name: None,
            designation: None,
            research_interests: None,
            portfolio_website: None,
            lab_website: None,
            source_url: None,
            google_scholar_url: None,
            recruiting_phd_students: TriState::Unspecified,
            currently_recruiting: TriState::Unspecified,
            hiring_semester: None,
            mailed: false,
            mailing_date: None,
            follow_up_mail_sent: false,
            follow_up_mail_date: None,
            priority: false,
            deadline: None,
            gre_required: false,
            comments: None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Recruiting in either sense: PhD students or currently recruiting.
    #[must_use]
    pub const fn is_recruiting(&self) -> bool {
        self.currently_recruiting.is_yes() || self.recruiting_phd_students.is_yes()
    }

    /// Trimmed, non-empty research-interest tokens in source order.
    pub fn interest_tokens(&self) -> impl Iterator<Item = &str> {
        self.research_interests
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Set the PhD-recruiting answer; `Yes` forces `currently_recruiting`.
    pub fn set_recruiting_phd_students(&mut self, value: TriState) {
        self.recruiting_phd_students = value;
        if value.is_yes() {
            self.currently_recruiting = TriState::Yes;
        }
    }

    /// Mark the first outreach mail. Clearing it drops the date.
    pub fn set_mailed(&mut self, mailed: bool, at: Option<DateTime<Utc>>) {
        self.mailed = mailed;
        self.mailing_date = if mailed { at } else { None };
    }

    /// Mark the follow-up mail. Clearing it drops the date.
    pub fn set_follow_up_sent(&mut self, sent: bool, at: Option<DateTime<Utc>>) {
        self.follow_up_mail_sent = sent;
        self.follow_up_mail_date = if sent { at } else { None };
    }
}

/// Payload for `POST /professor/create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewProfessor {
    pub name: String,
    pub university_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub portfolio_website: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub lab_website: String,
    #[serde(default)]
    pub research_interests: String,
    #[serde(default)]
    pub google_scholar_url: String,
    #[serde(default)]
    pub recruiting_phd_students: TriState,
    #[serde(default)]
    pub currently_recruiting: TriState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_semester: Option<HiringSemester>,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub priority: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gre_required: bool,
}

impl NewProfessor {
    /// Name and university are required; recruiting coupling is applied.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when a required field is blank.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        if self.name.trim().is_empty() || self.university_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "name and university are required".into(),
            ));
        }
        if self.recruiting_phd_students.is_yes() {
            self.currently_recruiting = TriState::Yes;
        }
        Ok(self)
    }
}
