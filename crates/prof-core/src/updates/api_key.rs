//! API key payloads.

use serde::Serialize;

use crate::errors::CoreError;

/// Body for `POST /gemini-keys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApiKey {
    pub key_name: String,
    pub api_key: String,
    pub is_active: bool,
}

impl NewApiKey {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the name or key is blank.
    pub fn validated(self) -> Result<Self, CoreError> {
        if self.key_name.trim().is_empty() {
            return Err(CoreError::Validation("key name is required".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(CoreError::Validation("API key is required for new keys".into()));
        }
        Ok(self)
    }
}

/// Body for `PUT /gemini-keys/{id}`. A blank replacement key is not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ApiKeyUpdate {
    #[must_use]
    pub fn new(api_key: Option<String>, is_active: Option<bool>) -> Self {
        Self {
            key_name: None,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            is_active,
        }
    }
}
