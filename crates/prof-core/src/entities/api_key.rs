use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::serde_util;

/// A Gemini API key registered for the extraction pipeline.
///
/// The backend returns the key masked; it is never echoed back on update.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: RecordId,
    pub key_name: String,
    #[serde(default, deserialize_with = "serde_util::blank_string")]
    pub api_key: Option<String>,
    #[serde(default, deserialize_with = "serde_util::null_as_false")]
    pub is_active: bool,
}
