//! # prof-auth
//!
//! Session handling for the Professor Search console.
//!
//! Provides the shared [`Session`] context (token, role, user id with change
//! notification), the [`SessionStore`] backends it persists through (OS
//! keychain with file fallback, file, memory), and role-based permissions.

pub mod error;
pub mod permissions;
pub mod session;
pub mod state;
pub mod store;

pub use error::AuthError;
pub use session::Session;
pub use state::SessionState;
pub use store::{FileStore, KeyringStore, MemoryStore, SessionStore, open_store};

use prof_config::SessionConfig;

/// Open the session configured by `config`.
///
/// # Errors
///
/// Returns `AuthError` if the store cannot be resolved or read.
pub fn open_session(config: &SessionConfig) -> Result<Session, AuthError> {
    Session::open(open_store(config)?)
}
