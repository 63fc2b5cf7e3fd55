//! Entity structs for backend records.
//!
//! Field names follow the backend's camelCase JSON. Form-backed fields are
//! normalized on the way in (see [`crate::serde_util`]).

mod api_key;
mod professor;
mod stats;
mod university;
mod user;
mod visitor_password;

pub use api_key::ApiKey;
pub use professor::{NewProfessor, Professor};
pub use stats::DashboardStats;
pub use university::{University, UniversityInput};
pub use user::{Permissions, ProfileUpdate, Registration, User};
pub use visitor_password::VisitorPassword;
