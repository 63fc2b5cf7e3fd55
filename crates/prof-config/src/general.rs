//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Longest accepted follow-up window, in days.
pub const MAX_FOLLOW_UP_DAYS: i64 = 365;

/// Rows per page in the professor search.
const fn default_page_size() -> usize {
    50
}

/// Days after the first mail before a follow-up is due.
const fn default_follow_up_days() -> i64 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size for paginated list output.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Follow-up window for the "needs follow-up" count.
    #[serde(default = "default_follow_up_days")]
    pub follow_up_days: i64,

    /// Directory Excel exports are written to. Current directory when unset.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            follow_up_days: default_follow_up_days(),
            export_dir: None,
        }
    }
}

impl GeneralConfig {
    /// Reject values the list screens cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero page size or a
    /// follow-up window outside `1..=MAX_FOLLOW_UP_DAYS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !(1..=MAX_FOLLOW_UP_DAYS).contains(&self.follow_up_days) {
            return Err(ConfigError::InvalidValue {
                field: "general.follow_up_days".into(),
                reason: format!(
                    "must be between 1 and {MAX_FOLLOW_UP_DAYS}, got {}",
                    self.follow_up_days
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.follow_up_days, 7);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn defaults_validate() {
        assert!(GeneralConfig::default().validate().is_ok());
    }

    #[test]
    fn follow_up_window_bounds() {
        let with_days = |follow_up_days| GeneralConfig {
            follow_up_days,
            ..GeneralConfig::default()
        };
        assert!(with_days(1).validate().is_ok());
        assert!(with_days(MAX_FOLLOW_UP_DAYS).validate().is_ok());
        for days in [0, -3, MAX_FOLLOW_UP_DAYS + 1, 100_000_000] {
            assert!(matches!(
                with_days(days).validate(),
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "general.follow_up_days"
            ));
        }
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = GeneralConfig {
            page_size: 0,
            ..GeneralConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "general.page_size"
        ));
    }
}
