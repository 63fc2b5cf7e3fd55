//! Client error types.

use prof_auth::AuthError;
use prof_config::ConfigError;
use prof_core::errors::CoreError;
use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`].
///
/// The three outcomes callers branch on are [`Self::Connect`] (no response
/// at all), [`Self::Api`] (the backend said no, message kept verbatim), and
/// [`Self::Unauthorized`] (the session has already been cleared).
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received.
    #[error("cannot connect to backend at {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend reported a failure (`success: false` or non-2xx).
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// The backend's `error` field, verbatim.
        message: String,
    },

    /// A `401` was returned; the local session has been cleared.
    #[error("session expired or invalid: logged out, run `profs auth login`")]
    Unauthorized,

    /// No session token is stored.
    #[error("not logged in: run `profs auth login`")]
    NotLoggedIn,

    /// The current role may not perform this action.
    #[error("not permitted for the {role} role: {action}")]
    NotPermitted { role: String, action: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    /// Transport error after a response started (body read, client build).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A downloaded file could not be written.
    #[error("write {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}
