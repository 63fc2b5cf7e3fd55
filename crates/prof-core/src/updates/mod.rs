//! Partial-update payloads for `PUT` endpoints.
//!
//! Only fields that were set are serialized. `Option<Option<T>>` fields
//! distinguish "leave unchanged" (`None`) from "clear" (`Some(None)`, sent as
//! `null`).

pub mod api_key;
pub mod professor;

pub use api_key::{ApiKeyUpdate, NewApiKey};
pub use professor::{ProfessorUpdate, ProfessorUpdateBuilder};
