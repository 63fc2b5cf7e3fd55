use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::serde_util;

/// A time-limited password that grants visitor access.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisitorPassword {
    pub id: RecordId,
    pub password: String,
    #[serde(default, deserialize_with = "serde_util::lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_util::lenient_datetime")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub used: bool,
    #[serde(default, deserialize_with = "serde_util::lenient_i64")]
    pub process_count: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub generated_by: Option<String>,
}

impl VisitorPassword {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}
