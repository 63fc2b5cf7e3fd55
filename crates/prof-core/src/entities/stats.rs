use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregates computed by the backend for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_universities: u64,
    #[serde(default)]
    pub total_professors: u64,
    #[serde(default)]
    pub mailed_professors: u64,
    /// Mails sent per month, keyed by the backend's month label.
    #[serde(default)]
    pub monthly_mails: BTreeMap<String, u64>,
    #[serde(default)]
    pub state_stats: BTreeMap<String, u64>,
    #[serde(default)]
    pub university_mailed_counts: BTreeMap<String, u64>,
}
