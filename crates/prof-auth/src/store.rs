//! Session persistence backends.
//!
//! The keyring store keeps the serialized session under one keychain entry
//! and falls back to the session file whenever the keychain is unavailable.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use prof_config::{SessionBackend, SessionConfig};

use crate::error::AuthError;
use crate::state::SessionState;

const DEFAULT_KEYRING_SERVICE: &str = "profsearch-cli";
const KEYRING_USER: &str = "session";

/// Where a [`crate::Session`] reads its initial state and writes changes.
pub trait SessionStore: Send + Sync {
    /// Read the persisted session. A missing session is an empty state.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the backend is unreadable or holds invalid data.
    fn load(&self) -> Result<SessionState, AuthError>;

    /// Persist `state`, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the backend cannot be written.
    fn save(&self, state: &SessionState) -> Result<(), AuthError>;

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if stored data exists but cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;

    /// Short backend label for status output.
    fn name(&self) -> &'static str;
}

/// Build the store selected by configuration.
///
/// # Errors
///
/// Returns [`AuthError::StoreError`] if no session file path can be resolved.
pub fn open_store(config: &SessionConfig) -> Result<Box<dyn SessionStore>, AuthError> {
    let path = config.file_path().ok_or_else(|| {
        AuthError::StoreError("home directory not found: cannot locate session file".into())
    })?;
    let file = FileStore::new(path);
    Ok(match config.backend {
        SessionBackend::File => Box::new(file),
        SessionBackend::Keyring => Box::new(KeyringStore::new(keyring_service(), file)),
    })
}

/// Keyring service name; `PROFSEARCH_KEYRING_SERVICE` overrides it for tests.
fn keyring_service() -> String {
    std::env::var("PROFSEARCH_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// JSON file with owner-only permissions (`0600`, parent `0700`).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<SessionState, AuthError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(SessionState::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SessionState::default()),
            Err(e) => Err(AuthError::StoreError(format!(
                "read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, state: &SessionState) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::StoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::StoreError(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::StoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::StoreError(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

// ---------------------------------------------------------------------------
// KeyringStore
// ---------------------------------------------------------------------------

/// OS keychain entry holding the serialized session, with file fallback.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
    fallback: FileStore,
}

impl KeyringStore {
    #[must_use]
    pub const fn new(service: String, fallback: FileStore) -> Self {
        Self { service, fallback }
    }

    fn entry(&self) -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&self.service, KEYRING_USER)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }
}

impl SessionStore for KeyringStore {
    fn load(&self) -> Result<SessionState, AuthError> {
        if let Ok(entry) = self.entry() {
            match entry.get_password() {
                Ok(json) if !json.trim().is_empty() => return Ok(serde_json::from_str(&json)?),
                Ok(_) | Err(keyring::Error::NoEntry) => {}
                Err(error) => tracing::debug!(%error, "keyring read failed; trying session file"),
            }
        }
        self.fallback.load()
    }

    fn save(&self, state: &SessionState) -> Result<(), AuthError> {
        let json = serde_json::to_string(state)?;
        match self.entry() {
            Ok(entry) => match entry.set_password(&json) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.fallback.save(state)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.fallback.save(state)
            }
        }
    }

    fn clear(&self) -> Result<(), AuthError> {
        if let Ok(entry) = self.entry() {
            if let Some(error) = delete_failure(entry.delete_credential()) {
                tracing::debug!(%error, "keyring delete failed; clearing session file");
            }
        }
        self.fallback.clear()
    }

    fn name(&self) -> &'static str {
        "keyring"
    }
}

/// A missing entry is already cleared; any other error is reported back.
fn delete_failure(result: keyring::Result<()>) -> Option<keyring::Error> {
    match result {
        Ok(()) | Err(keyring::Error::NoEntry) => None,
        Err(error) => Some(error),
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Process-local store for tests and one-shot invocations.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<SessionState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(initial: SessionState) -> Self {
        Self {
            state: Mutex::new(initial),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<SessionState, AuthError> {
        self.state
            .lock()
            .map(|state| state.clone())
            .map_err(|e| AuthError::Other(format!("session lock poisoned: {e}")))
    }

    fn save(&self, state: &SessionState) -> Result<(), AuthError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| AuthError::Other(format!("session lock poisoned: {e}")))?;
        *guard = state.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.save(&SessionState::default())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
