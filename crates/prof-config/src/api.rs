//! Backend API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Host fragment of the placeholder URL shipped in sample configs.
const PLACEHOLDER_HOST: &str = "your-ngrok-url";

fn default_api_prefix() -> String {
    "/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin without the API prefix (e.g. `https://abc123.ngrok-free.app`).
    #[serde(default)]
    pub base_url: String,

    /// Path prefix every endpoint lives under.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_prefix: default_api_prefix(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// A base URL is set and is not the sample placeholder.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let url = self.base_url.trim();
        !url.is_empty() && !url.contains(PLACEHOLDER_HOST)
    }

    /// Base URL joined with the API prefix, without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no usable base URL is set,
    /// or [`ConfigError::InvalidValue`] when it lacks an http(s) scheme.
    pub fn api_root(&self) -> Result<String, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
            });
        }
        let base = self.base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{base}'"),
            });
        }
        let prefix = self.api_prefix.trim().trim_matches('/');
        if prefix.is_empty() {
            Ok(base.to_string())
        } else {
            Ok(format!("{base}/{prefix}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_not_configured() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn placeholder_url_is_not_configured() {
        let config = ApiConfig {
            base_url: "https://your-ngrok-url.ngrok.io".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
        assert!(matches!(
            config.api_root(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn api_root_joins_prefix() {
        let config = ApiConfig {
            base_url: "https://abc123.ngrok-free.app/".into(),
            ..Default::default()
        };
        assert_eq!(config.api_root().unwrap(), "https://abc123.ngrok-free.app/api");
    }

    #[test]
    fn api_root_without_prefix() {
        let config = ApiConfig {
            base_url: "http://localhost:9787".into(),
            api_prefix: String::new(),
            ..Default::default()
        };
        assert_eq!(config.api_root().unwrap(), "http://localhost:9787");
    }

    #[test]
    fn api_root_rejects_missing_scheme() {
        let config = ApiConfig {
            base_url: "localhost:9787".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.api_root(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
