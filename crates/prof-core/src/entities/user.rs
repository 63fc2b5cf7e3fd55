use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserStatus;
use crate::errors::CoreError;
use crate::ids::RecordId;
use crate::serde_util;

const MIN_PASSWORD_LEN: usize = 6;

/// A registered account as returned by `/admin/users` and `/user/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub university: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub country: Option<String>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default, deserialize_with = "serde_util::lenient_i64")]
    pub access_days: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::lenient_datetime")]
    pub access_expires_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_util::lenient_datetime")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub is_access_expired: bool,
    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub can_add_professors: bool,
    #[serde(default, rename = "canUseAISearch", deserialize_with = "serde_util::null_as_false")]
    pub can_use_ai_search: bool,
    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub can_edit: bool,
    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub can_view: bool,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub gemini_api_key: Option<String>,
}

impl User {
    #[must_use]
    pub const fn permissions(&self) -> Permissions {
        Permissions {
            can_add_professors: self.can_add_professors,
            can_use_ai_search: self.can_use_ai_search,
            can_edit: self.can_edit,
            can_view: self.can_view,
        }
    }
}

/// Capabilities the console checks before offering a mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_add_professors: bool,
    #[serde(rename = "canUseAISearch")]
    pub can_use_ai_search: bool,
    pub can_edit: bool,
    pub can_view: bool,
}

impl Permissions {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            can_add_professors: true,
            can_use_ai_search: true,
            can_edit: true,
            can_view: true,
        }
    }

    #[must_use]
    pub const fn view_only() -> Self {
        Self {
            can_add_professors: false,
            can_use_ai_search: false,
            can_edit: false,
            can_view: true,
        }
    }
}

/// Payload for `POST /user/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub university: String,
    pub phone_number: String,
    pub subject: String,
    pub country: String,
    pub password: String,
}

impl Registration {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank required field or a
    /// password that is too short or unconfirmed.
    pub fn validated(self, confirm_password: &str) -> Result<Self, CoreError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("university", &self.university),
            ("phone number", &self.phone_number),
            ("subject", &self.subject),
            ("country", &self.country),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CoreError::Validation(format!("{field} is required")));
        }
        check_password(&self.password, confirm_password)?;
        Ok(self)
    }
}

/// Payload for `PUT /user/profile`. The password is omitted when unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Drop a blank password and check a non-blank one against its confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the password is too short or the
    /// confirmation differs.
    pub fn validated(mut self, confirm_password: Option<&str>) -> Result<Self, CoreError> {
        self.password = self.password.filter(|p| !p.is_empty());
        if let Some(password) = &self.password {
            check_password(password, confirm_password.unwrap_or(""))?;
        }
        Ok(self)
    }
}

fn check_password(password: &str, confirm: &str) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::Validation("password is required".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if password != confirm {
        return Err(CoreError::Validation("passwords do not match".into()));
    }
    Ok(())
}
