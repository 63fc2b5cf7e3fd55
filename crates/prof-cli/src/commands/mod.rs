pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod keys;
pub mod professor;
pub mod schema;
pub mod shared;
pub mod task;
pub mod university;
pub mod user;
pub mod visitor;
