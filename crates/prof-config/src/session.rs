//! Session persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the session token, role, and user id are persisted between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// OS keychain, falling back to the session file when unavailable.
    Keyring,
    /// Plain JSON file with owner-only permissions.
    #[default]
    File,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub backend: SessionBackend,

    /// Override for the session file location.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SessionConfig {
    /// Session file path: the override, else `~/.profsearch/session.json`.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| {
            dirs::home_dir().map(|home| home.join(".profsearch").join("session.json"))
        })
    }
}
