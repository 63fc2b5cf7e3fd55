//! # prof-core
//!
//! Core types shared by every Professor Search crate.
//!
//! - Entity structs for backend records (professors, universities, users,
//!   API keys, visitor passwords, dashboard statistics)
//! - Tri-state and status enums with their wire representations
//! - Opaque record identifiers
//! - Partial-update builders that enforce the outreach and recruiting
//!   coupling rules
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod serde_util;
pub mod updates;
