use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `profs auth login`")]
    NotAuthenticated,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("session store error: {0}")]
    StoreError(String),

    #[error("session data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
