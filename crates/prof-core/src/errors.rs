//! Cross-cutting error types.
//!
//! Transport and session failures are defined in `prof-client` and
//! `prof-auth`; the binary converges everything on `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (required field, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date or timestamp could not be parsed.
    #[error("Invalid date '{value}': expected RFC 3339, YYYY-MM-DDTHH:MM, or YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
